pub mod file_store;
pub mod memory_store;

use serde_json::Value;

use crate::error::{AppError, AppResult};

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

pub trait KeyValueStore {
    fn read_raw(&self, key: &str) -> AppResult<Option<String>>;
    fn write_raw(&self, key: &str, raw: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Missing keys, backend errors, malformed text and `null` all read as `None`.
pub fn read_json(store: &dyn KeyValueStore, key: &str) -> Option<Value> {
    let raw = match store.read_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "store key absent");
            return None;
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "store read failed; treating key as absent");
            return None;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "stored value is not valid json; treating key as absent");
            None
        }
    }
}

pub fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "invalid store key `{key}`: use letters, digits, `_`, `-` or `.`"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read_raw(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Store("backend offline".to_string()))
        }

        fn write_raw(&self, _key: &str, _raw: &str) -> AppResult<()> {
            Err(AppError::Store("backend offline".to_string()))
        }

        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::Store("backend offline".to_string()))
        }

        fn keys(&self) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn malformed_text_reads_as_absent() {
        let store = MemoryStore::new();
        store.write_raw("currentUser", "{not json").expect("write");
        assert_eq!(read_json(&store, "currentUser"), None);
    }

    #[test]
    fn stored_null_reads_as_absent() {
        let store = MemoryStore::new();
        store.write_raw("currentUser", "null").expect("write");
        assert_eq!(read_json(&store, "currentUser"), None);
    }

    #[test]
    fn backend_errors_read_as_absent() {
        assert_eq!(read_json(&BrokenStore, "currentUser"), None);
    }

    #[test]
    fn decodes_stored_json() {
        let store = MemoryStore::new();
        store
            .write_raw("currentUser", r#"{"name":"Ada"}"#)
            .expect("write");
        assert_eq!(
            read_json(&store, "currentUser"),
            Some(serde_json::json!({ "name": "Ada" }))
        );
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("currentUser").is_ok());
        assert!(validate_key("birth-chart.v2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../secrets").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }
}
