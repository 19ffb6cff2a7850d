//! Settings file and command-line resolution.
//!
//! Settings live in `<config_dir>/woord/config.toml`. Every key is optional:
//!
//! ```toml
//! email = "me@example.com"
//! password = "..."
//! language = "Russisch"
//!
//! [api]
//! base_url = "https://api.wrts.nl/api/v3"
//! page_size = 100
//! timeout_secs = 30
//!
//! [local]
//! separator = "="
//! left_language = "Nederlands"
//! right_language = "Russisch"
//! ```
//!
//! Command-line flags (and `WOORD_EMAIL` / `WOORD_PASSWORD`) win over the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use woord_core::{ApiConfig, Credentials, Languages, LocalOptions};

use crate::Args;

const CONFIG_DIR: &str = "woord";
const CONFIG_FILENAME: &str = "config.toml";

/// Word file used when neither files nor credentials are configured
pub const DEFAULT_WORD_FILE: &str = "words.txt";

/// Default search term for official lists
pub const DEFAULT_LANGUAGE: &str = "Russisch";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email: Option<String>,
    pub password: Option<String>,
    pub language: Option<String>,
    pub api: ApiSettings,
    pub local: LocalSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        let api = ApiConfig::default();
        Self {
            base_url: api.base_url,
            page_size: api.page_size,
            timeout_secs: api.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSettings {
    pub separator: char,
    pub left_language: String,
    pub right_language: String,
}

impl Default for LocalSettings {
    fn default() -> Self {
        let local = LocalOptions::default();
        Self {
            separator: local.separator,
            left_language: local.languages.source,
            right_language: local.languages.target,
        }
    }
}

/// Default settings file location
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings; a missing or unreadable file yields defaults
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_path) else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Where the word lists come from
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local word files
    Files(Vec<PathBuf>),
    /// Official lists from the provider
    Remote {
        credentials: Credentials,
        language: String,
    },
}

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: DataSource,
    pub api: ApiConfig,
    pub local: LocalOptions,
}

impl RunConfig {
    /// Merge flags over settings
    pub fn resolve(args: &Args, settings: Settings) -> Self {
        let local = LocalOptions {
            separator: args.separator.unwrap_or(settings.local.separator),
            languages: Languages::new(
                args.left_language
                    .clone()
                    .unwrap_or(settings.local.left_language),
                args.right_language
                    .clone()
                    .unwrap_or(settings.local.right_language),
            ),
        };

        let api = ApiConfig {
            base_url: settings.api.base_url,
            page_size: settings.api.page_size,
            timeout: Duration::from_secs(args.timeout.unwrap_or(settings.api.timeout_secs)),
        };

        let email = args.email.clone().or(settings.email).filter(|s| !s.is_empty());
        let password = args
            .password
            .clone()
            .or(settings.password)
            .filter(|s| !s.is_empty());

        let source = match (args.file.is_empty(), email, password) {
            (false, _, _) => DataSource::Files(args.file.clone()),
            (true, Some(email), Some(password)) => DataSource::Remote {
                credentials: Credentials { email, password },
                language: args
                    .language
                    .clone()
                    .or(settings.language)
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            },
            _ => DataSource::Files(vec![PathBuf::from(DEFAULT_WORD_FILE)]),
        };

        Self { source, api, local }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};
    use tempfile::TempDir;

    /// Parse flags without reading credentials from the environment
    fn args(argv: &[&str]) -> Args {
        let command = Args::command()
            .mut_arg("email", |a| a.env(None::<&'static str>))
            .mut_arg("password", |a| a.env(None::<&'static str>));
        let matches = command.get_matches_from(std::iter::once("woord").chain(argv.iter().copied()));
        Args::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "email = [").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "email = \"me@example.test\"\n[api]\ntimeout_secs = 5\n[local]\nseparator = \";\"\n",
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.email.as_deref(), Some("me@example.test"));
        assert_eq!(settings.api.timeout_secs, 5);
        assert_eq!(settings.api.page_size, 100);
        assert_eq!(settings.local.separator, ';');
        assert_eq!(settings.local.left_language, "Nederlands");
    }

    #[test]
    fn test_fallback_to_default_word_file() {
        let config = RunConfig::resolve(&args(&[]), Settings::default());
        match config.source {
            DataSource::Files(files) => assert_eq!(files, vec![PathBuf::from(DEFAULT_WORD_FILE)]),
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn test_email_flag_without_password_falls_back() {
        let config = RunConfig::resolve(&args(&["--email", "me@example.test"]), Settings::default());
        assert!(matches!(config.source, DataSource::Files(ref f) if f[0] == PathBuf::from(DEFAULT_WORD_FILE)));
    }

    #[test]
    fn test_credentials_select_remote() {
        let settings = Settings {
            email: Some("me@example.test".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let config = RunConfig::resolve(&args(&["--language", "Duits", "--timeout", "3"]), settings);

        assert_eq!(config.api.timeout, Duration::from_secs(3));
        match config.source {
            DataSource::Remote {
                credentials,
                language,
            } => {
                assert_eq!(credentials.email, "me@example.test");
                assert_eq!(language, "Duits");
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn test_files_win_over_credentials() {
        let settings = Settings {
            email: Some("me@example.test".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let config = RunConfig::resolve(&args(&["--file", "a.txt", "--separator", ";"]), settings);

        assert_eq!(config.local.separator, ';');
        assert!(matches!(config.source, DataSource::Files(ref f) if f.len() == 1));
    }
}
