use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Read-only view over an untyped JSON record; non-objects have no fields.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self {
            fields: value.and_then(Value::as_object),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key)
    }

    pub fn child(&self, key: &str) -> Record<'a> {
        Record::new(self.get(key))
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).and_then(non_blank)
    }

    // ids are sometimes stored as numbers
    pub fn scalar_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(value) => non_blank(value),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    pub fn nested_text(&self, parent: &str, key: &str) -> Option<String> {
        self.child(parent).text(key)
    }

    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(non_blank)
                .collect(),
        )
    }

    pub fn bool_map(&self, key: &str) -> BTreeMap<String, bool> {
        let Some(fields) = self.child(key).fields else {
            return BTreeMap::new();
        };

        fields
            .iter()
            .filter_map(|(name, value)| value.as_bool().map(|flag| (name.clone(), flag)))
            .collect()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_string())
}
