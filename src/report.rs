//! Crash report email delivery
//!
//! Sends a plain-text crash notification over SMTP so unattended
//! pipeline runs surface failures without anyone watching the logs.

use chrono::Local;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::Result;

/// SMTP settings for crash report delivery
#[derive(Debug, Clone)]
pub struct CrashReportConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (default: 587 for STARTTLS)
    pub port: u16,
    /// Username for authentication
    pub username: String,
    /// Password for authentication
    pub password: String,
    /// Sender address
    pub sender: String,
    /// Recipient address
    pub recipient: String,
    /// Application name used in the subject and body
    pub app_name: String,
}

impl CrashReportConfig {
    /// Create a new configuration for the given SMTP host and application.
    pub fn new(host: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 587,
            username: String::new(),
            password: String::new(),
            sender: String::new(),
            recipient: String::new(),
            app_name: app_name.into(),
        }
    }

    /// Set the port (default: 587)
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set authentication credentials
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the sender address
    pub fn sender(mut self, address: impl Into<String>) -> Self {
        self.sender = address.into();
        self
    }

    /// Set the recipient address
    pub fn recipient(mut self, address: impl Into<String>) -> Self {
        self.recipient = address.into();
        self
    }
}

/// Send a crash notification email for the given error message.
///
/// Delivery failures surface to the caller; drop the error to get
/// fire-and-forget behavior.
pub async fn send_crash_report(config: &CrashReportConfig, error_message: &str) -> Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H-%M-%S");
    let subject = format!("{} crashed on {}", config.app_name, timestamp);
    let body = format!(
        "{} crashed with error:\n\n{} on {}",
        config.app_name, error_message, timestamp
    );

    let message = Message::builder()
        .from(config.sender.parse()?)
        .to(config.recipient.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body)?;

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        .port(config.port)
        .credentials(Credentials::new(
            config.username.clone(),
            config.password.clone(),
        ))
        .build();

    mailer.send(message).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = CrashReportConfig::new("smtp.gmail.com", "cnv-pipeline");
        assert_eq!(config.port, 587);
        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.app_name, "cnv-pipeline");
    }

    #[test]
    fn test_config_builder_chaining() {
        let config = CrashReportConfig::new("mail.example.org", "cnv-pipeline")
            .port(465)
            .credentials("pipeline@example.org", "secret")
            .sender("pipeline@example.org")
            .recipient("oncall@example.org");
        assert_eq!(config.port, 465);
        assert_eq!(config.username, "pipeline@example.org");
        assert_eq!(config.recipient, "oncall@example.org");
    }

    #[tokio::test]
    async fn test_send_fails_on_invalid_sender_address() {
        let config = CrashReportConfig::new("localhost", "cnv-pipeline")
            .sender("not-an-address")
            .recipient("oncall@example.org");
        assert!(send_crash_report(&config, "boom").await.is_err());
    }
}
