use crate::error::{AppError, AppResult};
use crate::store::validate_key;

const DEFAULT_PROFILE: &str = "default";

/// Profile names double as settings file names and store directory names.
pub fn resolve_profile(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PROFILE.to_string());
    }

    validate_key(trimmed)
        .map_err(|_| AppError::InvalidInput(format!("invalid profile name `{trimmed}`")))?;
    Ok(trimmed.to_string())
}
