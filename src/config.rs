use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

/// Prefix of every environment variable the service reads
pub const ENV_PREFIX: &str = "MY_APP_";
/// Configuration file read from the working directory
pub const CONFIG_FILE: &str = "configuration.json";

const DEFAULT_ADDRESS: &str = "localhost";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATABASE_ADDRESS: &str = "localhost";
const DEFAULT_DATABASE_PORT: &str = "27017";
const DEFAULT_DATABASE_NAME: &str = "dictionary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Location of the document database
///
/// Resolved and reported at startup; the dictionary itself lives in memory
/// and never reads from or writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub address: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}/{}", self.address, self.port, self.name)
    }
}

impl Config {
    /// Load configuration from the config file, the environment and defaults
    ///
    /// The file path can be overridden with `MY_APP_CONFIG`. A missing file is
    /// not an error; a file that is present but not valid JSON is.
    pub fn load() -> Result<Self> {
        let path = env::var(format!("{}CONFIG", ENV_PREFIX))
            .unwrap_or_else(|_| CONFIG_FILE.to_string());
        let file = read_config_file(Path::new(&path))?;
        Self::resolve(&file, |name| env::var(name).ok())
    }

    /// Resolve every setting from its sources
    ///
    /// Each dotted key (e.g. `database.port`) is looked up in `file` first,
    /// then in `env` as `MY_APP_` followed by the key with `.` replaced by
    /// `_` (e.g. `MY_APP_database_port`), then falls back to its default.
    /// Empty values count as unset.
    pub fn resolve<F>(file: &JsonValue, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(file, key)
                .or_else(|| env(&env_var_name(key)).filter(|value| !value.is_empty()))
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            address: get("address", DEFAULT_ADDRESS),
            port: parse_port("port", &get("port", DEFAULT_PORT))?,
            database: DatabaseConfig {
                address: get("database.address", DEFAULT_DATABASE_ADDRESS),
                port: parse_port("database.port", &get("database.port", DEFAULT_DATABASE_PORT))?,
                name: get("database.name", DEFAULT_DATABASE_NAME),
            },
        })
    }

    /// Address to bind the HTTP listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_address());
        tracing::info!(
            "  Database: {} (not connected, dictionary is in memory)",
            self.database.connection_uri()
        );
    }
}

fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.replace('.', "_"))
}

fn lookup(file: &JsonValue, key: &str) -> Option<String> {
    let value = key
        .split('.')
        .try_fold(file, |value, part| value.get(part))?;
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16> {
    value.parse::<u16>().with_context(|| {
        format!(
            "{} ({}) must be a valid port number (0-65535), got '{}'",
            key,
            env_var_name(key),
            value
        )
    })
}

fn read_config_file(path: &Path) -> Result<JsonValue> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display())),
        Err(err) => {
            tracing::debug!("No config file at {} ({}), skipping", path.display(), err);
            Ok(JsonValue::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::resolve(&JsonValue::Null, env_from(&[])).unwrap();

        assert_eq!(config.address, "localhost");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "localhost:3000");
        assert_eq!(
            config.database.connection_uri(),
            "mongodb://localhost:27017/dictionary"
        );
    }

    #[test]
    fn test_config_from_env() {
        let env = env_from(&[
            ("MY_APP_address", "0.0.0.0"),
            ("MY_APP_port", "8080"),
            ("MY_APP_database_address", "db.internal"),
            ("MY_APP_database_port", "27018"),
            ("MY_APP_database_name", "words"),
        ]);

        let config = Config::resolve(&JsonValue::Null, env).unwrap();

        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.database,
            DatabaseConfig {
                address: "db.internal".to_string(),
                port: 27018,
                name: "words".to_string(),
            }
        );
    }

    #[test]
    fn test_file_takes_priority_over_env() {
        let file = json!({
            "port": 4000,
            "database": { "name": "from-file" }
        });
        let env = env_from(&[
            ("MY_APP_port", "8080"),
            ("MY_APP_address", "127.0.0.1"),
            ("MY_APP_database_name", "from-env"),
        ]);

        let config = Config::resolve(&file, env).unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.database.name, "from-file");
        assert_eq!(config.database.port, 27017);
    }

    #[test]
    fn test_port_as_string_in_file() {
        let config = Config::resolve(&json!({"port": "5000"}), env_from(&[])).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let file = json!({"address": ""});
        let env = env_from(&[("MY_APP_address", "")]);

        let config = Config::resolve(&file, env).unwrap();
        assert_eq!(config.address, "localhost");
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::resolve(&JsonValue::Null, env_from(&[("MY_APP_port", "not-a-number")]));
        assert!(result.is_err());
        let error = format!("{:#}", result.unwrap_err());
        assert!(error.contains("MY_APP_port"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = Config::resolve(&json!({"database": {"port": 99999}}), env_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_ignored() {
        let file = read_config_file(Path::new("/nonexistent/configuration.json")).unwrap();
        assert_eq!(file, JsonValue::Null);
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let path = env::temp_dir().join(format!("word-dictionary-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();

        let result = read_config_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_process_env() {
        unsafe {
            env::set_var("MY_APP_CONFIG", "/nonexistent/configuration.json");
            env::set_var("MY_APP_port", "9090");
        }

        let config = Config::load();

        unsafe {
            env::remove_var("MY_APP_CONFIG");
            env::remove_var("MY_APP_port");
        }

        assert_eq!(config.unwrap().port, 9090);
    }
}
