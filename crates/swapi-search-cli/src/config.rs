use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog API root, e.g. `https://swapi.dev/api`.
    pub base_url: Option<String>,
    /// Quiet period after the last keystroke before a search fires.
    pub debounce_ms: u64,
    /// Where the TUI writes its log. Unset means no TUI log.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            debounce_ms: 300,
            log_file: None,
        }
    }
}

/// Config file path: `~/.config/swapi-search/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("swapi-search").join("config.toml"))
}

/// Load config from `path` (or the default location), falling back to
/// defaults if it is missing or unreadable.
pub fn load_config(path: Option<&Path>) -> AppConfig {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };

    if let Some(path) = path
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        match parse(&contents) {
            Ok(config) => return config,
            Err(e) => {
                eprintln!(
                    "warning: failed to parse config at {}, using defaults: {e}",
                    path.display()
                );
            }
        }
    }

    AppConfig::default()
}

pub fn parse(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(config.base_url.is_none());
        assert_eq!(config.debounce_ms, 300);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
base_url = "http://localhost:8080/api"
debounce_ms = 150
log_file = "/tmp/swapi-search.log"
"#;
        let config = parse(toml_str).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(
            config.log_file.as_deref(),
            Some(Path::new("/tmp/swapi-search.log"))
        );
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse("debounce_ms = 500").unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(parse("debounce_ms = \"soon\"").is_err());
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("swapi-search-does-not-exist.toml");
        assert_eq!(load_config(Some(&path)), AppConfig::default());
    }

    #[test]
    fn load_reads_file_and_survives_garbage() {
        let dir = std::env::temp_dir().join(format!("swapi-search-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "base_url = \"http://example.test\"").unwrap();
        assert_eq!(
            load_config(Some(&good)).base_url.as_deref(),
            Some("http://example.test")
        );

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "this is = = not toml").unwrap();
        assert_eq!(load_config(Some(&bad)), AppConfig::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
