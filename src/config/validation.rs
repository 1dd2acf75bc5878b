//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("dispatch.open_timeout_secs must be greater than zero")]
    ZeroOpenTimeout,
    #[error("dispatch.write_timeout_secs must be greater than zero")]
    ZeroWriteTimeout,
    #[error(
        "dispatch.write_timeout_secs ({write}) must be shorter than dispatch.open_timeout_secs ({open})"
    )]
    WriteTimeoutTooLong { write: u64, open: u64 },
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let dispatch = &config.dispatch;

    if dispatch.open_timeout_secs == 0 {
        errors.push(ValidationError::ZeroOpenTimeout);
    }
    if dispatch.write_timeout_secs == 0 {
        errors.push(ValidationError::ZeroWriteTimeout);
    }
    if dispatch.open_timeout_secs > 0 && dispatch.write_timeout_secs >= dispatch.open_timeout_secs {
        errors.push(ValidationError::WriteTimeoutTooLong {
            write: dispatch.write_timeout_secs,
            open: dispatch.open_timeout_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_timeouts_fail() {
        let toml = r#"
[dispatch]
open_timeout_secs = 0
write_timeout_secs = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::ZeroOpenTimeout)));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::ZeroWriteTimeout)));
    }

    #[test]
    fn test_write_timeout_must_be_shorter() {
        let toml = r#"
[dispatch]
open_timeout_secs = 5
write_timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::WriteTimeoutTooLong { write: 5, open: 5 }]
        ));
    }
}
