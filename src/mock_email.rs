//! `MOCK_EMAIL` flag resolution.
//!
//! When the flag is true, the mail collaborator should simulate sending instead
//! of dispatching real email. Unset means real email is sent.

use crate::{env::EnvVars, error::ConfigError};

/// Parse a raw `MOCK_EMAIL` value.
///
/// - unset or empty: `false`
/// - `true` / `false` in any casing: the matching boolean
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMockEmail`] for any other value.
pub fn parse_mock_email(raw: Option<&str>) -> Result<bool, ConfigError> {
    let Some(value) = raw.filter(|v| !v.is_empty()) else {
        return Ok(false);
    };

    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidMockEmail {
            value: value.to_string(),
        })
    }
}

/// Resolve the mock-email flag from the environment snapshot.
pub fn get_mock_email_config(vars: &EnvVars) -> Result<bool, ConfigError> {
    parse_mock_email(vars.mock_email.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_means_send_real_email() {
        assert!(!get_mock_email_config(&EnvVars::default()).unwrap());
        assert!(!parse_mock_email(Some("")).unwrap());
    }

    #[test]
    fn accepts_any_casing() {
        for value in ["true", "TRUE", "True", "tRuE"] {
            assert!(parse_mock_email(Some(value)).unwrap(), "{value}");
        }
        for value in ["false", "FALSE", "False", "fAlSe"] {
            assert!(!parse_mock_email(Some(value)).unwrap(), "{value}");
        }
    }

    #[test]
    fn rejects_other_values() {
        for value in ["yes", "no", "1", "0", " true", "truthy"] {
            let err = parse_mock_email(Some(value)).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidMockEmail { value: ref got } if got.as_str() == value),
                "{value}: {err:?}"
            );
        }
    }

    #[test]
    fn reads_from_snapshot() {
        let vars = EnvVars::from_pairs([("MOCK_EMAIL", "True")]).unwrap();
        assert!(get_mock_email_config(&vars).unwrap());
    }
}
