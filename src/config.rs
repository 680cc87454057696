use crate::report::ColorChoice;
use crate::urgency::Thresholds;
use directories::ProjectDirs;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub thresholds: Thresholds,
    pub color: ColorChoice,
}

impl Config {
    /// Reads the config from the platform config directory, `None` if there is none yet.
    pub fn read() -> Result<Option<Self>> {
        let config_path = default_path()?;
        let config_str = match std::fs::read_to_string(&config_path) {
            Ok(str) => str,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("Unable to read config {}", config_path.to_string_lossy())
                });
            }
        };
        Self::parse(&config_str)
            .map(Some)
            .wrap_err_with(|| format!("Invalid config {}", config_path.to_string_lossy()))
    }

    /// Reads an explicitly requested config file, which must exist.
    pub fn read_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read config {}", path.to_string_lossy()))?;
        Self::parse(&config_str)
            .wrap_err_with(|| format!("Invalid config {}", path.to_string_lossy()))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_from(path),
            None => Ok(Self::read()?.unwrap_or_default()),
        }
    }

    fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.thresholds.validate()?;
        Ok(config)
    }
}

fn default_path() -> Result<PathBuf> {
    Ok(directories()?.config_dir().join("config.toml"))
}

fn directories() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "daysleft")
        .ok_or_else(|| eyre::eyre!("Unable to find config directory for the current system"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn partial_config() {
        let config = Config::parse("low_urgency_days = 14\ncolor = \"never\"\n").unwrap();
        assert_eq!(config.thresholds.low_urgency_days, 14);
        assert_eq!(config.thresholds.high_urgency_days, 0);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn invalid_config() {
        let data = [
            "low_urgency_days = \"ten\"",
            "color = \"sometimes\"",
            "low_urgency_days = 2\nhigh_urgency_days = 3",
            "not toml at all",
        ];
        for input in data {
            assert!(Config::parse(input).is_err(), "{input:?}");
        }
    }

    #[test]
    fn explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "high_urgency_days = 2").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.thresholds.high_urgency_days, 2);

        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
