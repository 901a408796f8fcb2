//! Configuration management for git_commit_message
//!
//! This module handles loading and parsing the YAML configuration file that
//! tells the tool which Ollama server and model to talk to.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory under the home directory that holds the configuration file
const CONFIG_DIR: &str = ".config/git_commit_message";

/// Name of the configuration file
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Inference server configuration
///
/// Every field falls back to its zero value when missing from the file.
/// The temperature is passed through untouched; the server decides whether
/// it is in range.
///
/// # Example YAML
///
/// ```yaml
/// ollama_url: http://localhost:11434
/// model: llama3
/// temperature: 0.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Ollama server
    pub ollama_url: String,
    /// Model identifier passed to `/api/generate`
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
}

/// Errors raised while locating or reading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user home directory")]
    NoHomeDirectory,

    #[error("could not read config file at {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse yaml config at {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Resolve `~/.config/git_commit_message/config.yaml`
///
/// # Errors
///
/// * The home directory cannot be determined
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE_NAME))
}

/// Load configuration from the default location
///
/// # Errors
///
/// * The home directory cannot be determined
/// * The file does not exist or cannot be read
/// * The file is not valid YAML
///
/// # Example
///
/// ```no_run
/// use git_commit_message::config::load;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = load()?;
/// println!("Using model {} at {}", config.model, config.ollama_url);
/// # Ok(())
/// # }
/// ```
pub fn load() -> Result<Config, ConfigError> {
    load_from(default_config_path()?)
}

/// Load configuration from an explicit path
///
/// # Arguments
///
/// * `config_path` - Path to the YAML configuration file
///
/// # Errors
///
/// * The file does not exist or cannot be read
/// * The file is not valid YAML
pub fn load_from(config_path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = config_path.as_ref();
    debug!(path = %path.display(), "loading configuration");

    let content = fs::read(path).map_err(|source| ConfigError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(content: &[u8]) -> Result<Config, serde_yaml::Error> {
    // serde_yaml rejects an empty document, but an empty file is a valid
    // config where every key is missing.
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Config::default());
    }
    serde_yaml::from_slice(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_valid_yaml() {
        // Arrange
        let file = write_config(
            "ollama_url: http://localhost:11434\nmodel: llama3\ntemperature: 0.2\n",
        );

        // Act
        let config = load_from(file.path()).unwrap();

        // Assert
        assert_eq!(
            config,
            Config {
                ollama_url: "http://localhost:11434".to_string(),
                model: "llama3".to_string(),
                temperature: 0.2,
            }
        );
    }

    #[test]
    fn test_load_from_missing_fields_use_zero_values() {
        // Arrange - only the model is set
        let file = write_config("model: mistral\n");

        // Act
        let config = load_from(file.path()).unwrap();

        // Assert
        assert_eq!(config.model, "mistral");
        assert_eq!(config.ollama_url, "");
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_load_from_ignores_unknown_keys() {
        // Arrange
        let file = write_config("model: llama3\nunused_key: true\nnested:\n  a: 1\n");

        // Act
        let result = load_from(file.path());

        // Assert
        assert_eq!(result.unwrap().model, "llama3");
    }

    #[test]
    fn test_load_from_empty_file_yields_defaults() {
        // Arrange
        let file = write_config("");

        // Act
        let config = load_from(file.path()).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_out_of_range_temperature_passes_through() {
        // Arrange
        let file = write_config("temperature: 7.5\n");

        // Act
        let config = load_from(file.path()).unwrap();

        // Assert - the server is authoritative on range
        assert_eq!(config.temperature, 7.5);
    }

    #[test]
    fn test_load_from_missing_file_is_not_found() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        // Act
        let result = load_from(&path);

        // Assert
        match result {
            Err(ConfigError::NotFound { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_invalid_yaml_is_malformed() {
        // Arrange - unclosed flow mapping
        let file = write_config("ollama_url: {unclosed\n");

        // Act
        let result = load_from(file.path());

        // Assert
        assert!(matches!(result, Err(ConfigError::Malformed { .. })));
    }

    #[test]
    fn test_load_from_invalid_utf8_is_malformed() {
        // Arrange - readable file whose bytes are not UTF-8
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"model: \xff\xfe\n").unwrap();

        // Act
        let result = load_from(file.path());

        // Assert
        assert!(matches!(result, Err(ConfigError::Malformed { .. })));
    }

    #[test]
    fn test_load_from_whitespace_only_file_yields_defaults() {
        // Arrange
        let file = write_config("  \n\t\n");

        // Act
        let config = load_from(file.path()).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_wrong_field_type_is_malformed() {
        // Arrange - temperature must be a number
        let file = write_config("temperature: warm\n");

        // Act
        let result = load_from(file.path());

        // Assert
        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::Malformed { .. }));
        assert!(error.to_string().contains("could not parse yaml config"));
    }

    #[test]
    fn test_default_config_path_layout() {
        // Act
        let path = default_config_path().unwrap();

        // Assert
        assert!(path.ends_with(".config/git_commit_message/config.yaml"));
    }
}
