//! Config file discovery and loading.
//!
//! Handles finding the config file and loading it. In each directory the
//! names `config.toml`, `config.yaml` and `config.yml` are tried in that
//! order. Directories are searched in this order:
//!
//! 1. The current working directory
//! 2. `$XDG_CONFIG_HOME/tmuxer/`
//! 3. `~/.config/tmuxer/`

use crate::config::{Config, ConfigFormat};
use crate::error::{Result, TmuxerError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Return the first existing config file in `dir`, if any.
pub fn find_in(dir: &Path) -> Option<PathBuf> {
    ConfigFormat::FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Determine the config file path.
///
/// If no existing config is found, returns `~/.config/tmuxer/config.toml`
/// as the default location, which [`load_config`] then reports as missing.
///
/// # Errors
///
/// Returns [`TmuxerError::NoConfigDir`] if the home directory cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_in(&cwd) {
            return Ok(path);
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if let Some(path) = find_in(&PathBuf::from(xdg).join("tmuxer")) {
            return Ok(path);
        }
    }

    let home = dirs::home_dir().ok_or(TmuxerError::NoConfigDir)?;
    let dir = home.join(".config").join("tmuxer");
    Ok(find_in(&dir).unwrap_or_else(|| dir.join("config.toml")))
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`TmuxerError::ConfigNotFound`] if the file doesn't exist
/// - [`TmuxerError::UnsupportedFormat`] if the extension is not TOML or YAML
/// - [`TmuxerError::IoError`] if reading fails
/// - [`TmuxerError::ParseError`] / [`TmuxerError::YamlError`] if parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(TmuxerError::ConfigNotFound(path.to_path_buf()));
    }
    let format = ConfigFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let config = Config::parse(&contents, format)?;
    debug!(path = %path.display(), sessions = config.sessions.len(), "loaded config");
    Ok(config)
}

/// Load config from `path` if given, otherwise from the default location.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => load_config(&default_config_path()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TOML: &str = "[[sessions]]\nname = \"dev\"\n";

    #[test]
    fn test_find_in_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_in(dir.path()), None);

        fs::write(dir.path().join("config.yml"), "sessions: []\n").unwrap();
        assert_eq!(find_in(dir.path()), Some(dir.path().join("config.yml")));

        fs::write(dir.path().join("config.toml"), TOML).unwrap();
        assert_eq!(find_in(dir.path()), Some(dir.path().join("config.toml")));
    }

    #[test]
    fn test_load_toml_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("config.toml");
        fs::write(&toml_path, TOML).unwrap();
        let yaml_path = dir.path().join("config.yaml");
        fs::write(&yaml_path, "sessions:\n  - name: dev\n").unwrap();

        let from_toml = load_config(&toml_path).unwrap();
        let from_yaml = load(Some(yaml_path.as_path())).unwrap();
        assert_eq!(from_toml, from_yaml);
        assert_eq!(from_toml.sessions[0].name, "dev");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("config.toml")).unwrap_err();
        assert!(matches!(err, TmuxerError::ConfigNotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(TmuxerError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[[sessions]\nname = ").unwrap();
        assert!(matches!(load_config(&path), Err(TmuxerError::ParseError(_))));

        let path = dir.path().join("config.yaml");
        fs::write(&path, "sessions: {name: [").unwrap();
        assert!(matches!(load_config(&path), Err(TmuxerError::YamlError(_))));
    }
}
