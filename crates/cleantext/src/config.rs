//! Configuration management for cleantext.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::CensorStyle;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "cleantext";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CLEANTEXT_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CLEANTEXT_`, sections split by `__`)
/// 2. TOML config file at `~/.config/cleantext/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter configuration.
    pub filter: FilterConfig,
    /// Input configuration.
    pub input: InputConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Filter-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Censor style used when none is given on the command line.
    pub style: CensorStyle,
}

/// Input-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions accepted as plain text (without the dot).
    pub allowed_extensions: Vec<String>,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when downloading the censored text.
    pub download_file_name: String,
    /// Highlight placeholders in terminal output.
    pub highlight: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["txt".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            download_file_name: "cleaned-text.txt".to_string(),
            highlight: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        tracing::debug!(path = %config_file.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error rather than
    /// a silent fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if `path` is not a file, otherwise
    /// any error from [`Config::load_from`].
    pub fn validate_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.input.allowed_extensions.is_empty() {
            return Err(Error::config_validation(
                "allowed_extensions must list at least one extension",
            ));
        }

        if let Some(bad) = self
            .input
            .allowed_extensions
            .iter()
            .find(|ext| {
                ext.trim().is_empty() || ext.contains(|c: char| matches!(c, '.' | '/' | '\\'))
            })
        {
            return Err(Error::config_validation(format!(
                "invalid extension in allowed_extensions: {bad:?}"
            )));
        }

        let name = self.output.download_file_name.trim();
        if name.is_empty() {
            return Err(Error::config_validation(
                "download_file_name must not be empty",
            ));
        }

        if Path::new(name).file_name().and_then(|n| n.to_str()) != Some(name) {
            return Err(Error::config_validation(format!(
                "download_file_name must be a bare file name: {name}"
            )));
        }

        Ok(())
    }

    /// Check whether a path has one of the allowed plain-text extensions.
    #[must_use]
    pub fn is_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.input
                    .allowed_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Get the download path for the censored text, relative to `dir`.
    #[must_use]
    pub fn download_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output.download_file_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.filter.style, CensorStyle::Censored);
        assert_eq!(config.input.allowed_extensions, vec!["txt".to_string()]);
        assert_eq!(config.output.download_file_name, "cleaned-text.txt");
        assert!(!config.output.highlight);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_no_extensions() {
        let mut config = Config::default();
        config.input.allowed_extensions.clear();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("allowed_extensions"));
    }

    #[test]
    fn test_validate_dotted_extension() {
        let mut config = Config::default();
        config.input.allowed_extensions = vec![".txt".to_string()];

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("invalid extension"));
    }

    #[test]
    fn test_validate_empty_download_name() {
        let mut config = Config::default();
        config.output.download_file_name = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("download_file_name"));
    }

    #[test]
    fn test_validate_download_name_with_directory() {
        let mut config = Config::default();
        config.output.download_file_name = "out/cleaned.txt".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("bare file name"));
    }

    #[test]
    fn test_is_allowed_extension() {
        let config = Config::default();

        assert!(config.is_allowed_extension(Path::new("notes.txt")));
        assert!(config.is_allowed_extension(Path::new("NOTES.TXT")));
        assert!(!config.is_allowed_extension(Path::new("notes.md")));
        assert!(!config.is_allowed_extension(Path::new("notes")));
    }

    #[test]
    fn test_download_path() {
        let config = Config::default();
        assert_eq!(
            config.download_path(Path::new("/tmp")),
            PathBuf::from("/tmp/cleaned-text.txt")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("cleantext"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[filter]\nstyle = \"emoji\"\n\n[output]\ndownload_file_name = \"clean.txt\"\nhighlight = true"
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.filter.style, CensorStyle::Emoji);
        assert_eq!(config.output.download_file_name, "clean.txt");
        assert!(config.output.highlight);
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn test_load_rejects_unknown_style() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[filter]\nstyle = \"sparkles\"").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[input]\nallowed_extensions = []").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_validate_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = Config::validate_file(&path);
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_validate_file_invalid() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[input]\nallowed_extensions = []").unwrap();

        let result = Config::validate_file(file.path());
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_validate_file_valid() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[filter]\nstyle = \"asterisk\"").unwrap();

        let config = Config::validate_file(file.path()).unwrap();
        assert_eq!(config.filter.style, CensorStyle::Asterisk);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"style\":\"censored\""));
        assert!(json.contains("download_file_name"));
    }

    #[test]
    fn test_filter_config_deserialize() {
        let json = r#"{"style": "asterisk"}"#;
        let filter: FilterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(filter.style, CensorStyle::Asterisk);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
