//! Error types for configuration resolution.
//!
//! Every variant here is a startup-time failure. Nothing is retried: the error
//! propagates to `main` and aborts the process with its message.

/// Configuration error.
///
/// # Error Categories
///
/// - **Validation Errors**: an environment variable holds a value outside its allowed set
/// - **Environment Errors**: the environment could not be deserialized at all
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `FLASK_ENVIRONMENT_CONFIG` is not one of the five profile names.
    #[error(
        "The environment config value has to be within these values: prod, dev, test, local, stag. Got '{value}'"
    )]
    InvalidEnvironment { value: String },

    /// `MOCK_EMAIL` is set to something other than `true`/`false` (any casing).
    #[error(
        "MOCK_EMAIL environment variable is optional if set, it has to be valued as either 'True' or 'False'. Got '{value}'"
    )]
    InvalidMockEmail { value: String },

    /// One of the consumed variables holds a value that is not valid UTF-8.
    #[error("{variable} environment variable is not valid unicode")]
    NotUnicode { variable: String },

    /// The environment could not be read into [`EnvVars`](crate::env::EnvVars).
    ///
    /// This wraps any envy::Error using the `#[from]` attribute.
    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),
}

impl ConfigError {
    /// Name of the environment variable that caused the error, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidEnvironment { .. } => Some("FLASK_ENVIRONMENT_CONFIG"),
            ConfigError::InvalidMockEmail { .. } => Some("MOCK_EMAIL"),
            ConfigError::NotUnicode { variable } => Some(variable.as_str()),
            ConfigError::Env(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_environment_message_lists_valid_names() {
        let err = ConfigError::InvalidEnvironment {
            value: "qa".to_string(),
        };
        let message = err.to_string();
        for name in ["prod", "dev", "test", "local", "stag"] {
            assert!(message.contains(name), "missing {name} in {message}");
        }
        assert!(message.contains("'qa'"));
        assert_eq!(err.variable(), Some("FLASK_ENVIRONMENT_CONFIG"));
    }

    #[test]
    fn invalid_mock_email_message_names_allowed_values() {
        let err = ConfigError::InvalidMockEmail {
            value: "yes".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'True' or 'False'"));
        assert_eq!(err.variable(), Some("MOCK_EMAIL"));
    }
}
