//! Per-environment attribute records.
//!
//! Every profile starts from [`ProfileSettings::base`] and replaces a few keys.
//! An overridden key replaces the base value completely.
//!
//! | Environment | Overrides |
//! |---|---|
//! | `local` | `DEBUG`, literal local database URI |
//! | `dev` | `DEBUG`, database URI from `DB_REMOTE_URL` |
//! | `test` | `TESTING`, `MOCK_EMAIL`, literal test database URI |
//! | `stag` | `DEBUG`, literal database URI |
//! | `prod` | literal database URI |

use chrono::TimeDelta;
use serde::{Serialize, Serializer};

use crate::{
    db_uri::{REDACTED, redact_password},
    env::EnvVars,
    environment::Environment,
};

/// Keys whose values are never shown.
const SECRET_KEYS: [&str; 2] = ["SECRET_KEY", "MAIL_PASSWORD"];

/// Local database used by the `local`, `stag` and `prod` profiles.
pub const LOCAL_DATABASE_URI: &str = "postgresql:///bit_schema";

/// Database used by the `test` profile.
pub const TEST_DATABASE_URI: &str = "postgresql:///bit_schema_test";

/// Settings exposed to the hosting application for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSettings {
    pub debug: bool,
    pub testing: bool,
    /// ORM change tracking
    pub sqlalchemy_track_modifications: bool,

    #[serde(serialize_with = "serialize_seconds")]
    pub jwt_access_token_expires: TimeDelta,
    #[serde(serialize_with = "serialize_seconds")]
    pub jwt_refresh_token_expires: TimeDelta,

    pub secret_key: Option<String>,
    /// Password hashing cost factor
    pub bcrypt_log_rounds: u32,
    pub wtf_csrf_enabled: bool,

    pub mail_server: Option<String>,
    pub mail_port: u16,
    pub mail_use_tls: bool,
    pub mail_use_ssl: bool,
    pub mail_username: Option<String>,
    pub mail_password: Option<String>,
    pub mail_default_sender: Option<String>,

    /// `None` for the base record, and for `dev` when `DB_REMOTE_URL` is unset.
    pub sqlalchemy_database_uri: Option<String>,

    /// Only the `test` profile sets this.
    pub mock_email: Option<bool>,
}

/// One value in the flat key/value view of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// Whole seconds
    Duration(i64),
    Absent,
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<Option<String>> for SettingValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(SettingValue::Absent, SettingValue::Str)
    }
}

impl From<TimeDelta> for SettingValue {
    fn from(value: TimeDelta) -> Self {
        SettingValue::Duration(value.num_seconds())
    }
}

fn serialize_seconds<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(value.num_seconds())
}

impl ProfileSettings {
    /// The base record every profile derives from.
    ///
    /// Secret key and mail server settings come from the environment and may
    /// be absent. No database URI is set.
    pub fn base(vars: &EnvVars) -> Self {
        Self {
            debug: false,
            testing: false,
            sqlalchemy_track_modifications: false,

            jwt_access_token_expires: TimeDelta::weeks(1),
            jwt_refresh_token_expires: TimeDelta::weeks(4),

            secret_key: vars.secret_key.clone(),
            bcrypt_log_rounds: 13,
            wtf_csrf_enabled: true,

            mail_server: vars.mail_server.clone(),
            mail_port: 465,
            mail_use_tls: false,
            mail_use_ssl: true,
            mail_username: vars.app_mail_username.clone(),
            mail_password: vars.app_mail_password.clone(),
            mail_default_sender: vars.mail_default_sender.clone(),

            sqlalchemy_database_uri: None,
            mock_email: None,
        }
    }

    /// Build the record for `env` by applying its overrides to [`base`](Self::base).
    pub fn for_environment(env: Environment, vars: &EnvVars) -> Self {
        let base = Self::base(vars);

        match env {
            Environment::Local => Self {
                debug: true,
                sqlalchemy_database_uri: Some(LOCAL_DATABASE_URI.to_string()),
                ..base
            },
            Environment::Dev => Self {
                debug: true,
                sqlalchemy_database_uri: vars.db_remote_url.clone(),
                ..base
            },
            Environment::Test => Self {
                testing: true,
                mock_email: Some(true),
                sqlalchemy_database_uri: Some(TEST_DATABASE_URI.to_string()),
                ..base
            },
            Environment::Stag => Self {
                debug: true,
                sqlalchemy_database_uri: Some(LOCAL_DATABASE_URI.to_string()),
                ..base
            },
            // Same URI as staging
            Environment::Prod => Self {
                sqlalchemy_database_uri: Some(LOCAL_DATABASE_URI.to_string()),
                ..base
            },
        }
    }

    /// Flat key/value view using the upper-case setting names.
    ///
    /// `MOCK_EMAIL` is only listed when the profile sets it.
    pub fn entries(&self) -> Vec<(&'static str, SettingValue)> {
        let mut entries: Vec<(&'static str, SettingValue)> = vec![
            ("DEBUG", self.debug.into()),
            ("TESTING", self.testing.into()),
            (
                "SQLALCHEMY_TRACK_MODIFICATIONS",
                self.sqlalchemy_track_modifications.into(),
            ),
            ("JWT_ACCESS_TOKEN_EXPIRES", self.jwt_access_token_expires.into()),
            ("JWT_REFRESH_TOKEN_EXPIRES", self.jwt_refresh_token_expires.into()),
            ("SECRET_KEY", self.secret_key.clone().into()),
            (
                "BCRYPT_LOG_ROUNDS",
                SettingValue::Int(i64::from(self.bcrypt_log_rounds)),
            ),
            ("WTF_CSRF_ENABLED", self.wtf_csrf_enabled.into()),
            ("MAIL_SERVER", self.mail_server.clone().into()),
            ("MAIL_PORT", SettingValue::Int(i64::from(self.mail_port))),
            ("MAIL_USE_TLS", self.mail_use_tls.into()),
            ("MAIL_USE_SSL", self.mail_use_ssl.into()),
            ("MAIL_USERNAME", self.mail_username.clone().into()),
            ("MAIL_PASSWORD", self.mail_password.clone().into()),
            ("MAIL_DEFAULT_SENDER", self.mail_default_sender.clone().into()),
            (
                "SQLALCHEMY_DATABASE_URI",
                self.sqlalchemy_database_uri.clone().into(),
            ),
        ];

        if let Some(mock) = self.mock_email {
            entries.push(("MOCK_EMAIL", mock.into()));
        }

        entries
    }

    /// [`entries`](Self::entries) safe for printing.
    ///
    /// Secret keys are replaced with a placeholder and the password inside the
    /// database URI is masked. Absent values stay absent.
    pub fn redacted_entries(&self) -> Vec<(&'static str, SettingValue)> {
        self.entries()
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    SettingValue::Str(_) if SECRET_KEYS.contains(&key) => {
                        SettingValue::Str(REDACTED.to_string())
                    }
                    SettingValue::Str(uri) if key == "SQLALCHEMY_DATABASE_URI" => {
                        SettingValue::Str(redact_password(&uri))
                    }
                    other => other,
                };
                (key, value)
            })
            .collect()
    }
}
