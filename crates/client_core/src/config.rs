use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

use crate::{
    account::DEFAULT_SUBMIT_DELAY, carousel::DEFAULT_ROTATION_INTERVAL_MS,
    navigation::DEFAULT_NAV_SCROLL_THRESHOLD, reveal::DEFAULT_REVEAL_THRESHOLD,
};

pub const DEFAULT_SETTINGS_FILE: &str = "quizmaster.toml";
const ENV_PREFIX: &str = "QUIZMASTER__";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub submit_delay_ms: u64,
    pub carousel_interval_ms: u64,
    pub reveal_threshold: f32,
    pub hero_reveal_delay_ms: u64,
    pub nav_scroll_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY.as_millis() as u64,
            carousel_interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            hero_reveal_delay_ms: 100,
            nav_scroll_threshold: DEFAULT_NAV_SCROLL_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    submit_delay_ms: Option<u64>,
    carousel_interval_ms: Option<u64>,
    reveal_threshold: Option<f32>,
    hero_reveal_delay_ms: Option<u64>,
    nav_scroll_threshold: Option<f32>,
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn hero_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.hero_reveal_delay_ms)
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let file_cfg: FileSettings = toml::from_str(raw).context("invalid settings file")?;
        let mut settings = Self::default();
        settings.merge(file_cfg);
        Ok(settings)
    }

    fn merge(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.submit_delay_ms {
            self.submit_delay_ms = v;
        }
        if let Some(v) = file_cfg.carousel_interval_ms {
            self.carousel_interval_ms = v;
        }
        if let Some(v) = file_cfg.reveal_threshold {
            self.reveal_threshold = v;
        }
        if let Some(v) = file_cfg.hero_reveal_delay_ms {
            self.hero_reveal_delay_ms = v;
        }
        if let Some(v) = file_cfg.nav_scroll_threshold {
            self.nav_scroll_threshold = v;
        }
    }

    /// Applies `QUIZMASTER__*` overrides. Values that fail to parse are logged and skipped.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        override_from(&lookup, "SUBMIT_DELAY_MS", &mut self.submit_delay_ms);
        override_from(&lookup, "CAROUSEL_INTERVAL_MS", &mut self.carousel_interval_ms);
        override_from(&lookup, "REVEAL_THRESHOLD", &mut self.reveal_threshold);
        override_from(&lookup, "HERO_REVEAL_DELAY_MS", &mut self.hero_reveal_delay_ms);
        override_from(&lookup, "NAV_SCROLL_THRESHOLD", &mut self.nav_scroll_threshold);
    }
}

fn override_from<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
) {
    let name = format!("{ENV_PREFIX}{key}");
    let Some(raw) = lookup(&name) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(_) => warn!(variable = %name, value = %raw, "ignoring unparseable setting override"),
    }
}

/// Loads settings from `explicit_path` (which must exist) or from
/// `quizmaster.toml` in the working directory when present, then applies
/// environment overrides.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match settings_file(explicit_path)? {
        Some((path, raw)) => Settings::from_toml_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(settings)
}

fn settings_file(explicit_path: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit_path {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        return Ok(Some((path.to_path_buf(), raw)));
    }

    let default_path = PathBuf::from(DEFAULT_SETTINGS_FILE);
    match fs::read_to_string(&default_path) {
        Ok(raw) => Ok(Some((default_path, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
