//! Environment-driven configuration profiles.
//!
//! Picks one of five named profiles (`local`, `dev`, `test`, `stag`, `prod`)
//! from `FLASK_ENVIRONMENT_CONFIG` and exposes its settings: database URI, mail
//! server, security parameters and token expirations.
//!
//! # Startup Flow
//!
//! 1. Read the environment once into [`EnvVars`]
//! 2. Resolve the active [`Environment`] and the `MOCK_EMAIL` flag
//! 3. Build the [`ProfileSettings`] for that environment
//!
//! [`AppConfig::from_env`] runs all three steps.

pub mod config;
pub mod db_uri;
pub mod env;
pub mod environment;
pub mod error;
pub mod mock_email;
pub mod profile;

pub use config::AppConfig;
pub use db_uri::{DbUriParts, build_db_uri};
pub use env::EnvVars;
pub use environment::{Environment, get_env_config, resolve_environment};
pub use error::ConfigError;
pub use mock_email::{get_mock_email_config, parse_mock_email};
pub use profile::{ProfileSettings, SettingValue};
