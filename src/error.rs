use thiserror::Error;

/// Main error type for cnv-utils operations
#[derive(Debug, Error)]
pub enum CnvUtilsError {
    #[error("Environment variable '{name}' not found: {message}")]
    EnvVarNotFound { name: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Email delivery failed: {0}")]
    EmailError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl CnvUtilsError {
    pub fn env_var_not_found(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EnvVarNotFound {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn email<S: Into<String>>(msg: S) -> Self {
        Self::EmailError(msg.into())
    }
}

/// Result type alias for cnv-utils operations
pub type Result<T> = std::result::Result<T, CnvUtilsError>;

/// Convert lettre message build errors to CnvUtilsError
impl From<lettre::error::Error> for CnvUtilsError {
    fn from(error: lettre::error::Error) -> Self {
        Self::EmailError(error.to_string())
    }
}

/// Convert lettre SMTP transport errors to CnvUtilsError
impl From<lettre::transport::smtp::Error> for CnvUtilsError {
    fn from(error: lettre::transport::smtp::Error) -> Self {
        Self::EmailError(error.to_string())
    }
}

/// Convert lettre address parse errors to CnvUtilsError
impl From<lettre::address::AddressError> for CnvUtilsError {
    fn from(error: lettre::address::AddressError) -> Self {
        Self::EmailError(error.to_string())
    }
}
