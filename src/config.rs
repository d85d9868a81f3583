use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::audio::config::AudioConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sanity: SanityConfig,
    pub audio: AudioConfig,
    pub boot_delay: Duration,
    pub title: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());

        let project_id = get("SANITY_PROJECT_ID").ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?;

        let sanity = SanityConfig {
            project_id,
            dataset: get("SANITY_DATASET").unwrap_or_else(|| "production".into()),
            api_version: get("SANITY_API_VERSION").unwrap_or_else(|| "2023-10-03".into()),
            use_cdn: parse_or("SANITY_USE_CDN", get("SANITY_USE_CDN"), true, parse_bool)?,
        };

        let defaults = AudioConfig::default();
        let audio = AudioConfig {
            volume: parse_or("RETROTERM_VOLUME", get("RETROTERM_VOLUME"), defaults.volume, |v| {
                v.parse::<u8>().ok().filter(|volume| *volume <= 100)
            })?,
            assets_dir: get("RETROTERM_ASSETS")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        };

        let boot_ms = parse_or("RETROTERM_BOOT_MS", get("RETROTERM_BOOT_MS"), 2000, |v| {
            v.parse::<u64>().ok()
        })?;

        Ok(Self {
            sanity,
            audio,
            boot_delay: Duration::from_millis(boot_ms),
            title: get("RETROTERM_TITLE").unwrap_or_else(|| "RAMSES".into()),
        })
    }
}

fn parse_or<T>(
    key: &'static str,
    value: Option<String>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => parse(value.trim()).ok_or(ConfigError::Invalid { key, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<&str, String> = pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_with_only_a_project() {
        let config = config(&[("SANITY_PROJECT_ID", "abc123")]).unwrap();
        assert_eq!(config.sanity.dataset, "production");
        assert_eq!(config.sanity.api_version, "2023-10-03");
        assert!(config.sanity.use_cdn);
        assert_eq!(config.boot_delay, Duration::from_millis(2000));
        assert_eq!(config.audio, AudioConfig::default());
        assert_eq!(config.title, "RAMSES");
    }

    #[test]
    fn project_is_required() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::Missing("SANITY_PROJECT_ID"));
        assert_eq!(
            config(&[("SANITY_PROJECT_ID", "  ")]).unwrap_err(),
            ConfigError::Missing("SANITY_PROJECT_ID")
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_USE_CDN", "off"),
            ("RETROTERM_BOOT_MS", "0"),
            ("RETROTERM_VOLUME", "35"),
            ("RETROTERM_ASSETS", "/srv/sounds"),
        ])
        .unwrap();

        assert_eq!(config.sanity.dataset, "staging");
        assert!(!config.sanity.use_cdn);
        assert_eq!(config.boot_delay, Duration::ZERO);
        assert_eq!(config.audio.volume, 35);
        assert_eq!(config.audio.assets_dir, PathBuf::from("/srv/sounds"));
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = config(&[("SANITY_PROJECT_ID", "abc123"), ("RETROTERM_VOLUME", "300")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "RETROTERM_VOLUME",
                value: "300".into()
            }
        );

        assert!(config(&[("SANITY_PROJECT_ID", "abc123"), ("SANITY_USE_CDN", "maybe")]).is_err());
    }
}
