use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::profile::{NormalizeOptions, StoreKeys};
use crate::store::validate_key;

const MAX_CHART_KEYS: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub user_key: Option<String>,
    #[serde(default)]
    pub chart_keys: Option<Vec<String>>,
    #[serde(default)]
    pub default_bio: Option<String>,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

impl Settings {
    pub fn store_keys(&self) -> AppResult<StoreKeys> {
        let mut keys = StoreKeys::default();

        if let Some(user_key) = &self.user_key {
            let user_key = user_key.trim();
            if user_key.is_empty() {
                return Err(AppError::Config(
                    "user_key in profile settings must not be blank".to_string(),
                ));
            }
            keys.user = configured_key("user_key", user_key)?;
        }

        if let Some(chart_keys) = &self.chart_keys {
            if chart_keys.len() > MAX_CHART_KEYS {
                return Err(AppError::Config(format!(
                    "at most {MAX_CHART_KEYS} chart_keys are supported, got {}",
                    chart_keys.len()
                )));
            }
            keys.charts = chart_keys
                .iter()
                .map(|key| key.trim())
                .filter(|key| !key.is_empty())
                .map(|key| configured_key("chart_keys", key))
                .collect::<AppResult<_>>()?;
        }

        Ok(keys)
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        let mut options = NormalizeOptions::default();
        if let Some(bio) = self
            .default_bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
        {
            options.default_bio = bio.to_string();
        }
        options
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

fn configured_key(field: &str, key: &str) -> AppResult<String> {
    validate_key(key)
        .map_err(|err| AppError::Config(format!("{field} in profile settings: {err}")))?;
    Ok(key.to_string())
}
