//! In-memory resource store for testing and local development.
//!
//! `MemoryStore` can be pre-populated with subject → [`Resource`] mappings,
//! allowing the projector and driver to run without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::{ExportError, Result};
use crate::store::{Resource, ResourceStore, DEFAULT_CONCURRENCY};

/// Store backed by a map of pre-registered resources.
pub struct MemoryStore {
    resources: RwLock<HashMap<String, Resource>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with the given resources.
    pub fn with_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        let store = Self::new();
        for resource in resources {
            store.register_resource(resource);
        }
        store
    }

    /// Register a resource to be returned for its subject.
    pub fn register_resource(&self, resource: Resource) {
        self.resources
            .write()
            .unwrap()
            .insert(resource.subject().to_string(), resource);
    }

    /// Remove a resource, making subsequent fetches of it fail.
    pub fn remove_resource(&self, subject: &str) {
        self.resources.write().unwrap().remove(subject);
    }

    pub fn len(&self) -> usize {
        self.resources.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().unwrap().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn get_resource(&self, subject: &str) -> Result<Resource> {
        self.resources
            .read()
            .unwrap()
            .get(subject)
            .cloned()
            .ok_or_else(|| ExportError::Fetch(format!("{}: not found in store", subject)))
    }

    fn concurrency_limit(&self) -> usize {
        DEFAULT_CONCURRENCY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_registered_resource() {
        let store = MemoryStore::new();
        store.register_resource(Resource::new(
            "https://x.test/onto/Animal",
            vec![("https://x.test/onto/legs".to_string(), json!(4))],
        ));

        let resource = store.get_resource("https://x.test/onto/Animal").await.unwrap();
        assert_eq!(resource.subject(), "https://x.test/onto/Animal");
        assert_eq!(resource.get("https://x.test/onto/legs"), Some(&json!(4)));
    }

    #[tokio::test]
    async fn test_unknown_subject_is_a_fetch_error() {
        let store = MemoryStore::new();
        let err = store.get_resource("https://x.test/missing").await.unwrap_err();
        match err {
            ExportError::Fetch(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Fetch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remove_makes_fetch_fail() {
        let store = MemoryStore::with_resources([Resource::new(
            "https://x.test/onto/Animal",
            vec![],
        )]);
        assert_eq!(store.len(), 1);

        store.remove_resource("https://x.test/onto/Animal");
        assert!(store.is_empty());
        assert!(store.get_resource("https://x.test/onto/Animal").await.is_err());
    }
}
