mod types;

pub use types::*;

use crate::error::{BookhoundError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "bookhound")
        .ok_or_else(|| BookhoundError::Config("Could not determine home directory".to_string()))
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Get the XDG-compliant data directory
pub fn data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Load config from file; a missing file means defaults, a file that fails to
/// parse is an error.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the completed-books file: CLI override, then config, then the
/// default location in the data directory.
pub fn books_path(config: &Config, cli_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.store.path {
        return Ok(path.clone());
    }
    Ok(data_dir()?.join("completed_books.json"))
}

/// Read the recommendation API key from the environment. Loaded once at the
/// recommend call site and passed down explicitly; deeper layers never read
/// the environment themselves.
pub fn api_key_from_env() -> Result<String> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(BookhoundError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.recommend.model, "gpt-3.5-turbo");
        assert_eq!(
            config.recommend.api_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(config.recommend.timeout_seconds, 60);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: Config = toml::from_str(
            r#"
            [recommend]
            model = "gpt-4o-mini"
            timeout_seconds = 20

            [store]
            path = "/tmp/books.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.recommend.model, "gpt-4o-mini");
        assert_eq!(config.recommend.timeout_seconds, 20);
        // unset keys keep their defaults
        assert_eq!(
            config.recommend.api_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            config.store.path.as_deref(),
            Some(Path::new("/tmp/books.json"))
        );
    }

    #[test]
    fn test_books_path_precedence() {
        let mut config = Config::default();
        config.store.path = Some(PathBuf::from("/from/config.json"));

        let cli = PathBuf::from("/from/cli.json");
        assert_eq!(
            books_path(&config, Some(&cli)).unwrap(),
            PathBuf::from("/from/cli.json")
        );
        assert_eq!(
            books_path(&config, None).unwrap(),
            PathBuf::from("/from/config.json")
        );
    }
}
