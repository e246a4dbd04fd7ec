use crate::store::{self, KeyValueStore};

use super::model::NormalizedProfile;
use super::normalize::{NormalizeOptions, normalize_with};

pub const DEFAULT_USER_KEY: &str = "currentUser";
pub const DEFAULT_CHART_KEYS: [&str; 3] = ["userChart", "birthChart", "astrologyChart"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub user: String,
    /// Tried in order; the first key holding a JSON object is the chart.
    pub charts: Vec<String>,
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER_KEY.to_string(),
            charts: DEFAULT_CHART_KEYS.iter().map(|key| key.to_string()).collect(),
        }
    }
}

pub fn load_viewer_profile(
    store: &dyn KeyValueStore,
    keys: &StoreKeys,
    options: &NormalizeOptions,
) -> Option<NormalizedProfile> {
    let Some(user) = store::read_json(store, &keys.user) else {
        tracing::info!(key = %keys.user, "no user record; profile absent");
        return None;
    };

    let chart = keys.charts.iter().find_map(|key| {
        let value = store::read_json(store, key)?;
        if !value.is_object() {
            tracing::debug!(key = %key, "chart entry is not an object; skipping");
            return None;
        }
        tracing::debug!(key = %key, "using chart record");
        Some(value)
    });

    normalize_with(Some(&user), chart.as_ref(), options)
}
