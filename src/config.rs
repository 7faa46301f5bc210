use crate::number::NumberLocale;
use crate::uptime::UptimeStyle;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub locale: Option<String>,
    pub uptime_style: UptimeStyle,
    pub confirm_timeout: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            uptime_style: UptimeStyle::Faithful,
            confirm_timeout: "2s".to_string(),
        }
    }
}

impl Config {
    pub fn confirm_timeout(&self) -> Result<chrono::Duration> {
        let timeout = humantime::parse_duration(&self.confirm_timeout)
            .with_context(|| format!("Invalid confirm_timeout '{}'", self.confirm_timeout))?;
        anyhow::ensure!(
            !timeout.is_zero(),
            "confirm_timeout must be longer than zero, got '{}'",
            self.confirm_timeout
        );
        Ok(chrono::Duration::from_std(timeout)?)
    }

    /// Command line flag, then config file, then the environment.
    pub fn resolve_locale(&self, flag: Option<&str>) -> Result<NumberLocale> {
        if let Some(tag) = flag.or(self.locale.as_deref()) {
            return Ok(tag.parse()?);
        }
        Ok(NumberLocale::from_env().unwrap_or_default())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let mut path = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    path.push(".upfmt");
    path.push("config.json");
    Ok(path)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_missing() -> Result<()> {
        let dir = tempdir()?;
        let config = load_config_from(&dir.path().join("config.json"))?;

        assert!(config.locale.is_none());
        assert_eq!(config.uptime_style, UptimeStyle::Faithful);
        assert_eq!(config.confirm_timeout()?, chrono::Duration::seconds(2));
        // Loading never creates the file.
        assert!(!dir.path().join("config.json").exists());

        Ok(())
    }

    #[test]
    fn test_load_config_partial() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "uptime_style": "trimmed", "confirm_timeout": "500ms" }"#)?;

        let config = load_config_from(&path)?;
        assert_eq!(config.uptime_style, UptimeStyle::Trimmed);
        assert_eq!(config.confirm_timeout()?, chrono::Duration::milliseconds(500));
        assert!(config.locale.is_none());

        Ok(())
    }

    #[test]
    fn test_load_config_invalid() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json")?;

        assert!(load_config_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_bad_timeout() {
        let config = Config {
            confirm_timeout: "soonish".to_string(),
            ..Config::default()
        };
        assert!(config.confirm_timeout().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "confirm_timeout": "0s" }"#)?;

        let config = load_config_from(&path)?;
        let err = config.confirm_timeout().unwrap_err();
        assert!(err.to_string().contains("longer than zero"));

        Ok(())
    }

    #[test]
    fn test_resolve_locale_precedence() -> Result<()> {
        let config = Config {
            locale: Some("de-DE".to_string()),
            ..Config::default()
        };

        assert_eq!(config.resolve_locale(Some("fr-FR"))?, NumberLocale::FrFr);
        assert_eq!(config.resolve_locale(None)?, NumberLocale::DeDe);
        assert!(config.resolve_locale(Some("xx")).is_err());

        Ok(())
    }
}
