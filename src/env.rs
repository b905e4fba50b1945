//! Raw environment snapshot.
//!
//! All environment access goes through [`EnvVars`]. It is read once at startup
//! and then passed by reference to the resolvers and profile builders, so no
//! other module calls `std::env` directly.

use std::ffi::OsString;

use serde::Deserialize;

use crate::error::ConfigError;

/// Exact names of the variables read into [`EnvVars`].
///
/// Anything else, including a different casing of one of these, is ignored.
pub const VARIABLES: [&str; 13] = [
    "FLASK_ENVIRONMENT_CONFIG",
    "MOCK_EMAIL",
    "SECRET_KEY",
    "MAIL_SERVER",
    "APP_MAIL_USERNAME",
    "APP_MAIL_PASSWORD",
    "MAIL_DEFAULT_SENDER",
    "DB_REMOTE_URL",
    "DB_TYPE",
    "DB_USERNAME",
    "DB_PASSWORD",
    "DB_ENDPOINT",
    "DB_NAME",
];

/// Every environment variable the configuration layer consumes.
///
/// All fields are optional. Field names are matched to variables by `envy`:
/// `flask_environment_config` reads `FLASK_ENVIRONMENT_CONFIG`, and so on.
///
/// # Environment Variables
///
/// - `FLASK_ENVIRONMENT_CONFIG`: active profile name, defaults to `dev`
/// - `MOCK_EMAIL`: `true`/`false` (any casing), defaults to false
/// - `SECRET_KEY`, `MAIL_SERVER`, `APP_MAIL_USERNAME`, `APP_MAIL_PASSWORD`,
///   `MAIL_DEFAULT_SENDER`: copied into every profile
/// - `DB_REMOTE_URL`: database URI of the development profile
/// - `DB_TYPE`, `DB_USERNAME`, `DB_PASSWORD`, `DB_ENDPOINT`, `DB_NAME`:
///   components for [`build_db_uri`](crate::db_uri::build_db_uri)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvVars {
    pub flask_environment_config: Option<String>,
    pub mock_email: Option<String>,

    pub secret_key: Option<String>,

    pub mail_server: Option<String>,
    pub app_mail_username: Option<String>,
    pub app_mail_password: Option<String>,
    pub mail_default_sender: Option<String>,

    pub db_remote_url: Option<String>,
    pub db_type: Option<String>,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub db_endpoint: Option<String>,
    pub db_name: Option<String>,
}

impl EnvVars {
    /// Read the process environment.
    ///
    /// A `.env` file is loaded first if one exists. Variables already present
    /// in the process environment take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - One of [`VARIABLES`] holds a value that is not valid UTF-8
    /// - The environment cannot be deserialized
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build a snapshot from raw OS strings.
    ///
    /// Entries with a non-UTF-8 name can't be one of [`VARIABLES`] and are
    /// skipped, as are unrelated variables whatever their value.
    pub fn from_os_pairs<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut pairs = Vec::new();
        for (name, value) in vars {
            let Ok(name) = name.into_string() else {
                continue;
            };
            if !VARIABLES.contains(&name.as_str()) {
                continue;
            }
            let value = value
                .into_string()
                .map_err(|_| ConfigError::NotUnicode { variable: name.clone() })?;
            pairs.push((name, value));
        }

        Ok(Self::from_pairs(pairs)?)
    }

    /// Build a snapshot from explicit `(name, value)` pairs.
    ///
    /// Only the exact upper-case names in [`VARIABLES`] are read. `envy`
    /// matches names case-insensitively, so other casings are dropped here.
    pub fn from_pairs<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(k, _): &(String, String)| VARIABLES.contains(&k.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_upper_case_names_to_fields() {
        let vars = EnvVars::from_pairs([
            ("FLASK_ENVIRONMENT_CONFIG", "prod"),
            ("APP_MAIL_USERNAME", "mailer"),
            ("DB_REMOTE_URL", "postgresql://remote/db"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(vars.flask_environment_config.as_deref(), Some("prod"));
        assert_eq!(vars.app_mail_username.as_deref(), Some("mailer"));
        assert_eq!(vars.db_remote_url.as_deref(), Some("postgresql://remote/db"));
        assert!(vars.mock_email.is_none());
        assert!(vars.secret_key.is_none());
    }

    #[test]
    fn empty_input_leaves_everything_unset() {
        let vars = EnvVars::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert!(vars.flask_environment_config.is_none());
        assert!(vars.db_type.is_none());
    }

    #[test]
    fn other_casings_are_ignored() {
        let vars = EnvVars::from_pairs([
            ("flask_environment_config", "prod"),
            ("Mock_Email", "true"),
        ])
        .unwrap();
        assert!(vars.flask_environment_config.is_none());
        assert!(vars.mock_email.is_none());

        // Both casings at once must not collide
        let vars = EnvVars::from_pairs([
            ("FLASK_ENVIRONMENT_CONFIG", "stag"),
            ("flask_environment_config", "prod"),
        ])
        .unwrap();
        assert_eq!(vars.flask_environment_config.as_deref(), Some("stag"));
    }

    #[cfg(unix)]
    #[test]
    fn unrelated_non_unicode_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = EnvVars::from_os_pairs([
            (OsString::from("BAD"), OsString::from_vec(vec![0xff])),
            (OsString::from_vec(vec![0xfe]), OsString::from("x")),
            (OsString::from("MOCK_EMAIL"), OsString::from("True")),
        ])
        .unwrap();
        assert_eq!(vars.mock_email.as_deref(), Some("True"));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_known_variable_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let err = EnvVars::from_os_pairs([(
            OsString::from("SECRET_KEY"),
            OsString::from_vec(vec![b'k', 0xff]),
        )])
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::NotUnicode { ref variable } if variable == "SECRET_KEY"),
            "{err:?}"
        );
        assert_eq!(err.variable(), Some("SECRET_KEY"));
    }

    #[test]
    fn empty_value_is_kept_as_set() {
        let vars = EnvVars::from_pairs([("MOCK_EMAIL", "")]).unwrap();
        assert_eq!(vars.mock_email.as_deref(), Some(""));
    }
}
