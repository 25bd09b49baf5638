use std::collections::BTreeMap;

use intl_message_core::Key;

use crate::error::RuntimeResult;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(contents: &str) -> RuntimeResult<Self> {
        let map: BTreeMap<String, String> = serde_json::from_str(contents)?;
        let mut catalog = Self::new();
        for (id, template) in map {
            let key = Key::new(id)?;
            catalog.insert(key, template);
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, id: Key, template: impl Into<String>) -> Option<String> {
        self.entries.insert(id.as_str().to_string(), template.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
