//! Typed environment variable accessors
//!
//! Each accessor reads one variable, coerces it to the target type,
//! and applies that accessor's fallback policy: path lookups fail with
//! a typed error, numeric and boolean lookups fall back to a
//! caller-supplied default with a logged notice. Accessors never
//! mutate the environment.

use std::path::PathBuf;

use tracing::warn;

use crate::env::source::EnvSource;
use crate::error::{CnvUtilsError, Result};

/// Resolve the directory where log files should be written.
///
/// Falls back to the current directory when the variable is unset.
/// A configured directory must already exist; this function does not
/// create it.
pub fn get_log_directory<E: EnvSource>(env: &E, name: &str) -> Result<PathBuf> {
    match env.var(name) {
        None => Ok(PathBuf::from(".")),
        Some(value) => {
            let path = PathBuf::from(&value);
            if !path.exists() {
                return Err(CnvUtilsError::env_var_not_found(
                    name,
                    format!("log directory '{}' does not exist", value),
                ));
            }
            Ok(path)
        }
    }
}

/// Retrieve a filesystem path from an environment variable.
///
/// The variable must be set. When `check_exists` is true the path must
/// also exist on the filesystem.
pub fn get_path<E: EnvSource>(env: &E, name: &str, check_exists: bool) -> Result<PathBuf> {
    let value = env
        .var(name)
        .ok_or_else(|| CnvUtilsError::env_var_not_found(name, "environment variable not set"))?;

    let path = PathBuf::from(&value);
    if check_exists && !path.exists() {
        return Err(CnvUtilsError::env_var_not_found(
            name,
            format!("path '{}' does not exist", value),
        ));
    }

    Ok(path)
}

/// Retrieve an integer, falling back to `default` when the variable is
/// unset or not parseable. Fallbacks are logged, never raised.
pub fn get_integer<E: EnvSource>(env: &E, name: &str, default: i64) -> i64 {
    let value = match env.var(name) {
        Some(value) => value,
        None => {
            warn!(
                "Environment variable {} has not been set, defaulting to {}",
                name, default
            );
            return default;
        }
    };

    match value.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "Environment variable {} value '{}' is not a valid integer, defaulting to {}",
                name, value, default
            );
            default
        }
    }
}

/// Retrieve a float, with the same fallback contract as [`get_integer`].
pub fn get_float<E: EnvSource>(env: &E, name: &str, default: f64) -> f64 {
    let value = match env.var(name) {
        Some(value) => value,
        None => {
            warn!(
                "Environment variable {} has not been set, defaulting to {}",
                name, default
            );
            return default;
        }
    };

    match value.parse::<f64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "Environment variable {} value '{}' is not a valid float, defaulting to {}",
                name, value, default
            );
            default
        }
    }
}

/// Retrieve a raw string value.
///
/// When the variable is unset, returns `default` unless
/// `error_on_missing` is set, in which case the lookup fails.
pub fn get_string<E: EnvSource>(
    env: &E,
    name: &str,
    default: &str,
    error_on_missing: bool,
) -> Result<String> {
    match env.var(name) {
        Some(value) => Ok(value),
        None if error_on_missing => Err(CnvUtilsError::env_var_not_found(
            name,
            "environment variable not set",
        )),
        None => Ok(default.to_string()),
    }
}

/// Retrieve a boolean, matching `true|1|yes|on` and `false|0|no|off`
/// case-insensitively. Any other value, or absence, falls back to
/// `default` with a logged notice.
pub fn get_boolean<E: EnvSource>(env: &E, name: &str, default: bool) -> bool {
    let value = match env.var(name) {
        Some(value) => value,
        None => {
            warn!(
                "Environment variable {} has not been set, defaulting to {}",
                name, default
            );
            return default;
        }
    };

    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            warn!(
                "Environment variable {} value '{}' is not a valid boolean, defaulting to {}",
                name, value, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::source::InMemoryEnv;

    #[test]
    fn test_get_integer_parses_valid_value() {
        let env = InMemoryEnv::new();
        env.set("BIN_SIZE", "42");
        assert_eq!(get_integer(&env, "BIN_SIZE", 300), 42);
    }

    #[test]
    fn test_get_integer_defaults_on_invalid_value() {
        let env = InMemoryEnv::new();
        env.set("BIN_SIZE", "abc");
        assert_eq!(get_integer(&env, "BIN_SIZE", 300), 300);
    }

    #[test]
    fn test_get_integer_defaults_when_unset() {
        let env = InMemoryEnv::new();
        assert_eq!(get_integer(&env, "BIN_SIZE", 300), 300);
    }

    #[test]
    fn test_get_integer_negative_value() {
        let env = InMemoryEnv::new();
        env.set("OFFSET", "-7");
        assert_eq!(get_integer(&env, "OFFSET", 0), -7);
    }

    #[test]
    fn test_get_float_parses_valid_value() {
        let env = InMemoryEnv::new();
        env.set("THRESHOLD", "0.25");
        assert_eq!(get_float(&env, "THRESHOLD", 1.0), 0.25);
    }

    #[test]
    fn test_get_float_defaults_on_invalid_value() {
        let env = InMemoryEnv::new();
        env.set("THRESHOLD", "not-a-number");
        assert_eq!(get_float(&env, "THRESHOLD", 1.0), 1.0);
    }

    #[test]
    fn test_get_boolean_true_variants() {
        let env = InMemoryEnv::new();
        for value in ["true", "TRUE", "True", "1", "yes", "YES", "on", "On"] {
            env.set("VERBOSE", value);
            assert!(get_boolean(&env, "VERBOSE", false), "'{}' should be true", value);
        }
    }

    #[test]
    fn test_get_boolean_false_variants() {
        let env = InMemoryEnv::new();
        for value in ["false", "FALSE", "False", "0", "no", "NO", "off", "Off"] {
            env.set("VERBOSE", value);
            assert!(!get_boolean(&env, "VERBOSE", true), "'{}' should be false", value);
        }
    }

    #[test]
    fn test_get_boolean_defaults_on_unrecognized_value() {
        let env = InMemoryEnv::new();
        env.set("VERBOSE", "maybe");
        assert!(get_boolean(&env, "VERBOSE", true));
        assert!(!get_boolean(&env, "VERBOSE", false));
    }

    #[test]
    fn test_get_string_returns_set_value() {
        let env = InMemoryEnv::new();
        env.set("GENOME_BUILD", "hg38");
        assert_eq!(
            get_string(&env, "GENOME_BUILD", "hg19", false).unwrap(),
            "hg38"
        );
    }

    #[test]
    fn test_get_string_returns_default_when_unset() {
        let env = InMemoryEnv::new();
        assert_eq!(
            get_string(&env, "GENOME_BUILD", "hg19", false).unwrap(),
            "hg19"
        );
    }

    #[test]
    fn test_get_string_errors_when_missing_and_required() {
        let env = InMemoryEnv::new();
        let err = get_string(&env, "GENOME_BUILD", "", true).unwrap_err();
        assert!(matches!(
            err,
            CnvUtilsError::EnvVarNotFound { ref name, .. } if name == "GENOME_BUILD"
        ));
    }

    #[test]
    fn test_get_path_errors_when_unset() {
        let env = InMemoryEnv::new();
        assert!(get_path(&env, "REFERENCE_DIR", true).is_err());
        assert!(get_path(&env, "REFERENCE_DIR", false).is_err());
    }

    #[test]
    fn test_get_path_skips_existence_check_when_disabled() {
        let env = InMemoryEnv::new();
        env.set("REFERENCE_DIR", "/no/such/path/anywhere");
        let path = get_path(&env, "REFERENCE_DIR", false).unwrap();
        assert_eq!(path, PathBuf::from("/no/such/path/anywhere"));
    }

    #[test]
    fn test_get_path_existing_directory() {
        let env = InMemoryEnv::new();
        let dir = tempfile::tempdir().unwrap();
        env.set("REFERENCE_DIR", dir.path().to_str().unwrap());
        let path = get_path(&env, "REFERENCE_DIR", true).unwrap();
        assert_eq!(path, dir.path());
    }

    #[test]
    fn test_get_log_directory_defaults_to_current_dir() {
        let env = InMemoryEnv::new();
        assert_eq!(
            get_log_directory(&env, "LOG_DIR").unwrap(),
            PathBuf::from(".")
        );
    }

    #[test]
    fn test_get_log_directory_missing_path_errors() {
        let env = InMemoryEnv::new();
        env.set("LOG_DIR", "/no/such/log/dir");
        let err = get_log_directory(&env, "LOG_DIR").unwrap_err();
        assert!(matches!(
            err,
            CnvUtilsError::EnvVarNotFound { ref name, .. } if name == "LOG_DIR"
        ));
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let env = InMemoryEnv::new();
        env.set("BIN_SIZE", "42");
        env.set("VERBOSE", "yes");
        assert_eq!(
            get_integer(&env, "BIN_SIZE", 0),
            get_integer(&env, "BIN_SIZE", 0)
        );
        assert_eq!(
            get_boolean(&env, "VERBOSE", false),
            get_boolean(&env, "VERBOSE", false)
        );
    }
}
