use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "grammar_stats.toml";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directives used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Log every token the recognizer consumes.
    pub trace_tokens: bool,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            log_filter: raw_config
                .log_filter
                .unwrap_or(DEFAULT_LOG_FILTER.into()),
            trace_tokens: raw_config.trace_tokens.unwrap_or_default(),
        }
    }
}

impl From<&Config> for RawConfig {
    fn from(config: &Config) -> Self {
        Self {
            log_filter: Some(config.log_filter.clone()),
            trace_tokens: Some(config.trace_tokens),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    log_filter: Option<String>,
    trace_tokens: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
            trace_tokens: false,
        }
    }
}

impl Config {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&RawConfig::from(self))
    }

    /// Parses a config file; unset keys take their defaults.
    pub fn from_toml(contents: &str) -> Option<Self> {
        toml::from_str::<RawConfig>(contents).ok().map(Self::from)
    }

    /// Reads `grammar_stats.toml` from `root_dir`, if there is a readable one.
    pub fn read_from<P: AsRef<Path>>(root_dir: P) -> Option<Self> {
        let contents = std::fs::read_to_string(root_dir.as_ref().join(CONFIG_FILE)).ok()?;
        Self::from_toml(&contents)
    }
}

/// Writes the default configuration into `root_dir`, refusing to overwrite
/// an existing file.
pub fn write_default_config<P: AsRef<Path>>(root_dir: P) -> std::io::Result<PathBuf> {
    let config_path = root_dir.as_ref().join(CONFIG_FILE);
    if config_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", config_path.display()),
        ));
    }

    let contents = Config::default().to_toml().map_err(std::io::Error::other)?;
    std::fs::write(&config_path, contents)?;
    Ok(config_path)
}

/// Missing, unreadable or malformed files all fall back to the defaults.
pub fn load_config<P: AsRef<Path>>(root_dir: Option<P>) -> Config {
    root_dir.and_then(Config::read_from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("trace_tokens = true").unwrap();
        assert_eq!(config.log_filter, "warn");
        assert!(config.trace_tokens);

        let config = Config::from_toml(r#"log_filter = "debug""#).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(!config.trace_tokens);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(Config::from_toml("trace_tokens = \"yes\"").is_none());
        assert!(Config::from_toml("not toml at all").is_none());
    }

    #[test]
    fn test_default_config_round_trips() {
        let toml = Config::default().to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml), Some(Config::default()));
    }

    #[test]
    fn test_written_config_is_loaded_back() {
        let dir = std::env::temp_dir().join(format!("grammar-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(dir.join(CONFIG_FILE));

        let path = write_default_config(&dir).unwrap();
        assert_eq!(path, dir.join(CONFIG_FILE));
        assert_eq!(load_config(Some(&dir)), Config::default());

        let err = write_default_config(&dir).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_project_config_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("grammar-config-custom-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "log_filter = \"debug\"\ntrace_tokens = true\n").unwrap();

        let expected = Config {
            log_filter: "debug".into(),
            trace_tokens: true,
        };
        assert_eq!(Config::read_from(&dir), Some(expected.clone()));
        assert_eq!(load_config(Some(&dir)), expected);

        std::fs::write(dir.join(CONFIG_FILE), "trace_tokens = [").unwrap();
        assert_eq!(Config::read_from(&dir), None);
        assert_eq!(load_config(Some(&dir)), Config::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("grammar-config-missing-dir");
        assert_eq!(load_config(Some(&dir)), Config::default());
        assert_eq!(load_config(None::<&Path>), Config::default());
    }
}
