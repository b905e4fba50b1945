//! Application configuration loading.
//!
//! This is the single startup step that turns the environment into settings.
//! It reads the environment once, runs both resolvers and builds the active
//! profile. The resulting [`AppConfig`] is immutable and is handed to whatever
//! needs it.

use serde::Serialize;

use crate::{
    env::EnvVars,
    environment::{Environment, resolve_environment},
    error::ConfigError,
    mock_email::get_mock_email_config,
    profile::ProfileSettings,
};

/// Resolved configuration for the running process.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Active environment, fixed for the lifetime of the process
    pub environment: Environment,

    /// `MOCK_EMAIL` as resolved from the environment
    pub mock_email: bool,

    /// Settings of the active profile
    pub settings: ProfileSettings,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The environment cannot be deserialized
    /// - `FLASK_ENVIRONMENT_CONFIG` is not a recognized environment name
    /// - `MOCK_EMAIL` is set to something other than `true`/`false`
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = EnvVars::from_env()?;
        Self::from_vars(&vars)
    }

    /// Load configuration from an existing environment snapshot.
    pub fn from_vars(vars: &EnvVars) -> Result<Self, ConfigError> {
        let environment = resolve_environment(vars)?;
        let mock_email = get_mock_email_config(vars)?;
        let settings = ProfileSettings::for_environment(environment, vars);

        tracing::info!(
            environment = %environment,
            record = environment.record_name(),
            "Configuration profile selected"
        );
        tracing::debug!(
            mock_email,
            debug = settings.debug,
            testing = settings.testing,
            "Profile settings built"
        );

        // Missing values are left for the collaborators to reject
        if settings.secret_key.is_none() {
            tracing::warn!("SECRET_KEY is not set");
        }
        if settings.sqlalchemy_database_uri.is_none() {
            tracing::warn!(record = environment.record_name(), "No database URI configured");
        }

        Ok(Self {
            environment,
            mock_email,
            settings,
        })
    }

    /// Identifier of the active attribute record.
    pub fn record_name(&self) -> &'static str {
        self.environment.record_name()
    }

    /// Whether outgoing email should be simulated.
    ///
    /// A profile that sets `MOCK_EMAIL` itself wins over the environment flag.
    pub fn should_mock_email(&self) -> bool {
        self.settings.mock_email.unwrap_or(self.mock_email)
    }
}
