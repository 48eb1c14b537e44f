//! Layered application settings.
//!
//! Built-in defaults, then an optional TOML file, then `TUKIJA_*`
//! environment variables. Lists in the environment are comma separated,
//! e.g. `TUKIJA_SCOPES=scope-a,scope-b`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tukija_domain::{YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE, YOUTUBE_READONLY_SCOPE};

use crate::persistence::{DEFAULT_CREDENTIALS_DIR, DEFAULT_TOKEN_FILE_NAME};
use crate::youtube::DEFAULT_API_BASE_URL;

/// Settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "tukija.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TUKIJA";

/// Errors raised while assembling settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A source could not be read or a value has the wrong type.
    #[error("invalid settings: {0}")]
    Config(#[from] config::ConfigError),
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Path of the client secret document.
    pub client_secret_path: PathBuf,
    /// Directory under the home directory holding the token cache.
    pub credentials_dir: String,
    /// Token cache file name.
    pub token_file_name: String,
    /// Scopes requested during authorization.
    pub scopes: Vec<String>,
    /// YouTube Data API root.
    pub api_base_url: String,
    /// Open the authorization URL in the default browser.
    pub open_browser: bool,
}

impl Settings {
    /// Loads settings from `tukija.toml` and the process environment.
    ///
    /// # Errors
    /// Returns `SettingsError` if a source is malformed.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(DEFAULT_SETTINGS_FILE))
    }

    /// Loads settings from `path` (if it exists) and the process environment.
    ///
    /// # Errors
    /// Returns `SettingsError` if a source is malformed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        Self::build(path, None)
    }

    fn build(path: &Path, env: Option<HashMap<String, String>>) -> Result<Self, SettingsError> {
        let scopes = vec![YOUTUBE_READONLY_SCOPE, YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE];

        let settings = Config::builder()
            .set_default("client_secret_path", "client_secret.json")?
            .set_default("credentials_dir", DEFAULT_CREDENTIALS_DIR)?
            .set_default("token_file_name", DEFAULT_TOKEN_FILE_NAME)?
            .set_default("scopes", scopes)?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("open_browser", false)?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scopes")
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_secret_path: PathBuf::from("client_secret.json"),
            credentials_dir: DEFAULT_CREDENTIALS_DIR.to_string(),
            token_file_name: DEFAULT_TOKEN_FILE_NAME.to_string(),
            scopes: vec![
                YOUTUBE_READONLY_SCOPE.to_string(),
                YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE.to_string(),
            ],
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            open_browser: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().expect("temp dir");
        let settings =
            Settings::build(&dir.path().join("absent.toml"), Some(HashMap::new())).expect("load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tukija.toml");
        std::fs::write(
            &path,
            "client_secret_path = \"/etc/tukija/secret.json\"\nopen_browser = true\n",
        )
        .expect("write");

        let settings = Settings::build(&path, Some(HashMap::new())).expect("load");
        assert_eq!(
            settings.client_secret_path,
            PathBuf::from("/etc/tukija/secret.json")
        );
        assert!(settings.open_browser);
        assert_eq!(settings.token_file_name, DEFAULT_TOKEN_FILE_NAME);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tukija.toml");
        std::fs::write(&path, "token_file_name = \"from-file.json\"\n").expect("write");

        let env = HashMap::from([
            ("TUKIJA_TOKEN_FILE_NAME".to_string(), "from-env.json".to_string()),
            ("TUKIJA_SCOPES".to_string(), "scope-a,scope-b".to_string()),
        ]);

        let settings = Settings::build(&path, Some(env)).expect("load");
        assert_eq!(settings.token_file_name, "from-env.json");
        assert_eq!(settings.scopes, vec!["scope-a", "scope-b"]);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("tukija.toml");
        std::fs::write(&path, "open_browser = [").expect("write");

        assert!(Settings::build(&path, Some(HashMap::new())).is_err());
    }
}
