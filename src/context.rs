use std::path::PathBuf;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::profile::{NormalizeOptions, StoreKeys};
use crate::store::FileStore;

#[derive(Debug)]
pub struct AppContext {
    pub store: FileStore,
    pub keys: StoreKeys,
    pub options: NormalizeOptions,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool, store_dir: Option<PathBuf>) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile)?;
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        Self::from_parts(&profile, json, store_dir, &paths, &settings)
    }

    pub(crate) fn from_parts(
        profile: &str,
        json: bool,
        store_dir: Option<PathBuf>,
        paths: &AppPaths,
        settings: &Settings,
    ) -> AppResult<Self> {
        let keys = settings.store_keys()?;
        let options = settings.normalize_options();
        let store_dir = store_dir
            .or_else(|| settings.store_dir.clone())
            .unwrap_or_else(|| paths.store_dir(profile));
        tracing::debug!(profile = %profile, store = %store_dir.display(), "bootstrapped context");

        let store = FileStore::new(store_dir);
        let output = Output::new(json);

        Ok(Self {
            store,
            keys,
            options,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_dir_precedence_is_flag_then_settings_then_profile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_roots(dir.path().join("c"), dir.path().join("d"))
            .expect("paths");
        let settings = Settings {
            store_dir: Some(dir.path().join("from-settings")),
            ..Settings::default()
        };

        let ctx = AppContext::from_parts(
            "work",
            false,
            Some(dir.path().join("from-flag")),
            &paths,
            &settings,
        )
        .expect("context");
        assert_eq!(ctx.store.dir(), dir.path().join("from-flag"));

        let ctx = AppContext::from_parts("work", false, None, &paths, &settings).expect("context");
        assert_eq!(ctx.store.dir(), dir.path().join("from-settings"));

        let ctx = AppContext::from_parts("work", false, None, &paths, &Settings::default())
            .expect("context");
        assert_eq!(ctx.store.dir(), paths.store_dir("work"));
    }

    #[test]
    fn invalid_configured_keys_fail_bootstrap() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_roots(dir.path().join("c"), dir.path().join("d"))
            .expect("paths");
        let settings = Settings {
            user_key: Some("current/User".to_string()),
            ..Settings::default()
        };

        let result = AppContext::from_parts("work", false, None, &paths, &settings);
        assert!(matches!(result, Err(crate::error::AppError::Config(_))));
    }
}
