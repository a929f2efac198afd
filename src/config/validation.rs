//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required connection fields are populated
//! - Enforce the table prefix character set
//! - Reject placeholder secrets left unchanged
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted into the system

use thiserror::Error;

use crate::config::schema::Settings;

/// Secret value shipped by installers before a real phrase is chosen.
const SECRET_PLACEHOLDER: &str = "put your unique phrase here";

/// A single semantic violation found in assembled settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field holds an empty string.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The table prefix contains an illegal character.
    #[error("table prefix {prefix:?} may only contain letters, digits and underscores")]
    InvalidTablePrefix { prefix: String },

    /// An authentication secret still holds the installer placeholder.
    #[error("{field} still holds the placeholder secret")]
    PlaceholderSecret { field: &'static str },
}

/// Validate assembled settings, collecting every violation.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // An empty password is legal; local dev databases often have none.
    if settings.database.name.is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "database.name",
        });
    }
    if settings.database.user.is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "database.user",
        });
    }
    if settings.database.host.is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "database.host",
        });
    }

    if settings.table_prefix.is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "table_prefix",
        });
    } else if !settings
        .table_prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        errors.push(ValidationError::InvalidTablePrefix {
            prefix: settings.table_prefix.clone(),
        });
    }

    for (field, value) in settings.auth.entries() {
        if value.is_empty() {
            errors.push(ValidationError::EmptyField { field });
        } else if value == SECRET_PLACEHOLDER {
            errors.push(ValidationError::PlaceholderSecret { field });
        }
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
    use crate::config::env::EnvDescriptor;
    use std::path::PathBuf;

    fn settings() -> Settings {
        let descriptor = EnvDescriptor::from_json(
            r#"{"database":{"creds":{"database":"db1","user":"u1","password":"p1"},"internal_connection":{"host":"h1"}}}"#,
        )
        .unwrap();
        Settings::from_descriptor(&descriptor, PathBuf::from("/srv/site"))
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&settings()).is_ok());
    }

    #[test]
    fn test_empty_password_is_allowed() {
        let mut settings = settings();
        settings.database.password = String::new();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_hyphenated_prefix_rejected() {
        let mut settings = settings();
        settings.table_prefix = "cms-".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidTablePrefix {
                prefix: "cms-".to_string()
            }]
        );
    }

    #[test]
    fn test_all_violations_collected() {
        let mut settings = settings();
        settings.database.name = String::new();
        settings.database.host = String::new();
        settings.table_prefix = "p fix".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyField {
            field: "database.name"
        }));
        assert!(errors.contains(&ValidationError::EmptyField {
            field: "database.host"
        }));
    }

    #[test]
    fn test_placeholder_secret_rejected() {
        let mut settings = settings();
        settings.auth.nonce_salt = SECRET_PLACEHOLDER.to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::PlaceholderSecret {
                field: "auth.nonce_salt"
            }]
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut settings = settings();
        settings.auth.auth_key = String::new();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyField {
                field: "auth.auth_key"
            }]
        );
    }
}
