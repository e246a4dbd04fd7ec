use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "viewer-profile";

#[derive(Debug, Clone)]
pub struct AppPaths {
    profiles_dir: PathBuf,
    stores_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;
        let data_root = dirs::data_dir()
            .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?;

        Self::from_roots(config_root.join(APP_DIR), data_root.join(APP_DIR))
    }

    pub fn from_roots(config_dir: PathBuf, data_dir: PathBuf) -> AppResult<Self> {
        let profiles_dir = config_dir.join("profiles");
        let stores_dir = data_dir.join("stores");

        fs::create_dir_all(&profiles_dir)?;
        fs::create_dir_all(&stores_dir)?;

        Ok(Self {
            profiles_dir,
            stores_dir,
        })
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }

    pub fn store_dir(&self, profile: &str) -> PathBuf {
        self.stores_dir.join(profile)
    }
}
