pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabwatch")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("crabwatch-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load_config_from(Path::new("/nonexistent/crabwatch/config.toml")).unwrap();
        assert!(cfg.ui.big_digits);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = scratch_dir("read");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[ui]\nshow_key_hints = false\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert!(!cfg.ui.show_key_hints);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = scratch_dir("bad");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
