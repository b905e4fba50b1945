//! Deployment environment selection.
//!
//! `FLASK_ENVIRONMENT_CONFIG` picks one of five profiles. The set is closed:
//! anything else is rejected at startup.

use std::fmt;
use std::str::FromStr;

use crate::{env::EnvVars, error::ConfigError};

/// Profile used when `FLASK_ENVIRONMENT_CONFIG` is not set.
pub const DEFAULT_ENVIRONMENT: Environment = Environment::Dev;

/// A recognized deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
    Stag,
    Local,
    Test,
}

impl Environment {
    /// Every recognized environment, in the order they are listed in error messages.
    pub const ALL: [Environment; 5] = [
        Environment::Prod,
        Environment::Dev,
        Environment::Test,
        Environment::Local,
        Environment::Stag,
    ];

    /// Short name as it appears in `FLASK_ENVIRONMENT_CONFIG`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Prod => "prod",
            Environment::Stag => "stag",
            Environment::Local => "local",
            Environment::Test => "test",
        }
    }

    /// Identifier of the attribute record this environment activates.
    ///
    /// The hosting application uses this to pick the record to load; resolving
    /// it to actual values is done by
    /// [`ProfileSettings::for_environment`](crate::profile::ProfileSettings::for_environment).
    pub fn record_name(&self) -> &'static str {
        match self {
            Environment::Dev => "DevelopmentConfig",
            Environment::Prod => "ProductionConfig",
            Environment::Stag => "StagingConfig",
            Environment::Local => "LocalConfig",
            Environment::Test => "TestingConfig",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Exact, case-sensitive match on the short name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidEnvironment {
                value: s.to_string(),
            })
    }
}

/// Resolve the active environment.
///
/// Unset means [`DEFAULT_ENVIRONMENT`]. A variable that is set but empty is
/// not treated as unset and fails validation like any other unknown value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvironment`] for a value outside the five names.
pub fn resolve_environment(vars: &EnvVars) -> Result<Environment, ConfigError> {
    match vars.flask_environment_config.as_deref() {
        None => Ok(DEFAULT_ENVIRONMENT),
        Some(name) => name.parse(),
    }
}

/// Resolve the active environment and return the identifier of its record.
///
/// # Errors
///
/// Same as [`resolve_environment`].
pub fn get_env_config(vars: &EnvVars) -> Result<&'static str, ConfigError> {
    resolve_environment(vars).map(|env| env.record_name())
}
