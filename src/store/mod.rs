//! Remote resource store client.
//!
//! This module provides:
//! - [`ResourceStore`] trait for abstracting store access
//! - [`Resource`] value type holding one subject's ordered property/value set
//! - [`HttpStore`] production client that fetches JSON-AD over HTTP
//! - [`MemoryStore`] in-memory store for testing without network access
//!
//! The store is an injected capability: everything above it (mapper, projector,
//! driver) is pure logic over data the store already fetched.

mod memory;

pub use memory::MemoryStore;

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::debug;

use crate::datatype::Datatype;
use crate::errors::{ExportError, Result};
use crate::urls;

/// Default bound on concurrent fetches.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Media type of the store's JSON-AD representation.
const JSON_AD_MIME: &str = "application/ad+json";

/// Trait for fetching resources from the store.
///
/// Abstracting the store enables dependency injection: production code uses
/// [`HttpStore`], while tests use [`MemoryStore`] with pre-registered
/// resources.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetch the resource at `subject`.
    ///
    /// Not-found and transport failures are signalled as
    /// [`ExportError::Fetch`]; callers treat any fetch failure as fatal for
    /// the whole run.
    async fn get_resource(&self, subject: &str) -> Result<Resource>;

    /// Upper bound on fetches dispatched concurrently against this store.
    fn concurrency_limit(&self) -> usize {
        DEFAULT_CONCURRENCY
    }
}

/// One subject's property/value set, in fetch order.
#[derive(Debug, Clone)]
pub struct Resource {
    subject: String,
    prop_vals: Vec<(String, Value)>,
}

impl Resource {
    pub fn new(subject: impl Into<String>, prop_vals: Vec<(String, Value)>) -> Self {
        Self {
            subject: subject.into(),
            prop_vals,
        }
    }

    /// Build a resource from a fetched JSON-AD document (an object keyed by
    /// `@id` plus absolute property URLs). Key order is preserved.
    pub fn from_json_ad(subject: &str, doc: serde_json::Map<String, Value>) -> Self {
        Self {
            subject: subject.to_string(),
            prop_vals: doc.into_iter().collect(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// All property/value pairs in fetch order, reserved keys included.
    pub fn prop_vals(&self) -> &[(String, Value)] {
        &self.prop_vals
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.prop_vals
            .iter()
            .find(|(prop, _)| prop == property)
            .map(|(_, val)| val)
    }

    /// Human-readable title: shortname, falling back to name.
    pub fn title(&self) -> Option<&str> {
        self.get(urls::SHORTNAME)
            .or_else(|| self.get(urls::NAME))
            .and_then(Value::as_str)
    }

    /// Declared datatype, present only on property resources.
    pub fn datatype(&self) -> Option<Datatype> {
        self.get(urls::DATATYPE)
            .and_then(Value::as_str)
            .map(Datatype::from_url)
    }

    /// Class subjects listed on an ontology root.
    pub fn classes(&self) -> Vec<String> {
        self.subject_list(urls::CLASSES)
    }

    /// Property subjects listed on an ontology root.
    pub fn properties(&self) -> Vec<String> {
        self.subject_list(urls::PROPERTIES)
    }

    /// Instance subjects listed on an ontology root.
    pub fn instances(&self) -> Vec<String> {
        self.subject_list(urls::INSTANCES)
    }

    fn subject_list(&self, property: &str) -> Vec<String> {
        match self.get(property) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Production store client fetching JSON-AD over HTTP.
///
/// Carries an optional agent secret supplied once at construction; without it
/// all fetches are anonymous. Fetched resources are cached for the lifetime of
/// the store, so a property's schema resource is fetched at most once per run
/// even though every projected member consults it.
pub struct HttpStore {
    client: ReqwestClient,
    agent_secret: Option<String>,
    concurrency_limit: usize,
    cache: RwLock<HashMap<String, Resource>>,
}

impl HttpStore {
    pub fn new() -> Self {
        Self {
            client: ReqwestClient::new(),
            agent_secret: None,
            concurrency_limit: DEFAULT_CONCURRENCY,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Supply an agent secret for authenticated fetches.
    pub fn with_agent(mut self, secret: impl Into<String>) -> Self {
        self.agent_secret = Some(secret.into());
        self
    }

    /// Override the concurrent-fetch bound.
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }
}

impl Default for HttpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceStore for HttpStore {
    async fn get_resource(&self, subject: &str) -> Result<Resource> {
        if let Some(resource) = self.cache.read().unwrap().get(subject) {
            return Ok(resource.clone());
        }

        debug!(subject, "fetching resource");

        let mut request = self.client.get(subject).header(ACCEPT, JSON_AD_MIME);
        if let Some(secret) = &self.agent_secret {
            request = request.bearer_auth(secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExportError::Fetch(format!("{}: {}", subject, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::Fetch(format!("{}: HTTP {}", subject, status)));
        }

        let doc: serde_json::Map<String, Value> = response
            .json()
            .await
            .map_err(|e| ExportError::Fetch(format!("{}: invalid JSON-AD body: {}", subject, e)))?;

        let resource = Resource::from_json_ad(subject, doc);
        self.cache
            .write()
            .unwrap()
            .insert(subject.to_string(), resource.clone());

        Ok(resource)
    }

    fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn animal_root() -> Resource {
        Resource::new(
            "https://x.test/onto",
            vec![
                (urls::SHORTNAME.to_string(), json!("onto")),
                (urls::CLASSES.to_string(), json!(["https://x.test/onto/Animal"])),
                (urls::PROPERTIES.to_string(), json!(["https://x.test/onto/legs"])),
            ],
        )
    }

    #[test]
    fn test_resource_get_and_title() {
        let root = animal_root();
        assert_eq!(root.title(), Some("onto"));
        assert_eq!(
            root.get(urls::CLASSES),
            Some(&json!(["https://x.test/onto/Animal"]))
        );
        assert_eq!(root.get("https://x.test/absent"), None);
    }

    #[test]
    fn test_resource_member_lists() {
        let root = animal_root();
        assert_eq!(root.classes(), vec!["https://x.test/onto/Animal"]);
        assert_eq!(root.properties(), vec!["https://x.test/onto/legs"]);
        assert!(root.instances().is_empty());
    }

    #[test]
    fn test_resource_datatype_parsing() {
        let property = Resource::new(
            "https://x.test/onto/legs",
            vec![(
                urls::DATATYPE.to_string(),
                json!("https://atomicdata.dev/datatypes/integer"),
            )],
        );
        assert_eq!(property.datatype(), Some(Datatype::Integer));

        let root = animal_root();
        assert_eq!(root.datatype(), None);
    }

    #[test]
    fn test_from_json_ad_preserves_order() {
        let doc: serde_json::Map<String, Value> = serde_json::from_str(
            r#"{"@id":"https://x.test/onto/Animal","b":"2","a":"1"}"#,
        )
        .unwrap();
        let resource = Resource::from_json_ad("https://x.test/onto/Animal", doc);

        let keys: Vec<&str> = resource
            .prop_vals()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["@id", "b", "a"]);
    }

    #[test]
    fn test_http_store_builder() {
        let store = HttpStore::new()
            .with_agent("secret")
            .with_concurrency_limit(3);
        assert_eq!(store.concurrency_limit(), 3);

        // The bound never drops below one worker.
        let store = HttpStore::new().with_concurrency_limit(0);
        assert_eq!(store.concurrency_limit(), 1);
    }
}
