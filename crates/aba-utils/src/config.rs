//! Configuration file and environment helpers

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the target type
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON file
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigFileError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an environment variable and parse it
///
/// Returns `None` when the variable is unset. A value that does not parse is
/// logged and ignored.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    parse_var(key, |key| std::env::var(key).ok())
}

/// Like [`env_var`], with the raw value taken from `lookup`
pub fn parse_var<T: FromStr>(key: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        delay_ms: u64,
    }

    #[test]
    fn test_read_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "igbo", "delay_ms": 1200}}"#).unwrap();

        let sample: Sample = read_json_file(file.path()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "igbo".to_string(),
                delay_ms: 1200
            }
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_json_file::<Sample>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_read_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = read_json_file::<Sample>(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_env_var_unset() {
        assert_eq!(env_var::<u64>("ABA_UTILS_TEST_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_parse_var() {
        let lookup = |key: &str| match key {
            "DELAY" => Some(" 250 ".to_string()),
            "BROKEN" => Some("soon".to_string()),
            _ => None,
        };
        assert_eq!(parse_var::<u64>("DELAY", lookup), Some(250));
        assert_eq!(parse_var::<u64>("BROKEN", lookup), None);
        assert_eq!(parse_var::<u64>("MISSING", lookup), None);
    }
}
