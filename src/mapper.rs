//! Local identifier mapping for one ontology root.
//!
//! The mapper owns the bijection between absolute member subject URLs and short
//! identifiers scoped to the ontology root. It is populated fully before any
//! projection starts and is only read afterwards, so projections can share it
//! by reference without locking.

use std::collections::HashMap;

use reqwest::Url;

use crate::errors::{ExportError, Result};

/// Maps absolute member subjects to ontology-local identifiers.
///
/// A subject is a *member* when it equals the root or is textually prefixed by
/// the root's URL followed by `/`. Only members are ever registered; references
/// to anything else pass through unchanged.
///
/// # Example
///
/// ```
/// use ontoport::mapper::LocalIdMapper;
///
/// let mut mapper = LocalIdMapper::new("https://x.test/onto").unwrap();
/// mapper.register("https://x.test/onto").unwrap();
/// mapper.register("https://x.test/onto/Person").unwrap();
///
/// assert_eq!(mapper.rewrite_if_member("https://x.test/onto/Person"), "Person");
/// assert_eq!(
///     mapper.rewrite_if_member("https://ext.test/Other"),
///     "https://ext.test/Other"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LocalIdMapper {
    root: String,
    root_local_id: String,
    table: HashMap<String, String>,
}

impl LocalIdMapper {
    /// Create a mapper scoped to `root`. The root's own local identifier is its
    /// URL path with the leading slash removed; a root without a path would
    /// yield an empty local id and is rejected up front.
    pub fn new(root: &str) -> Result<Self> {
        let parsed =
            Url::parse(root).map_err(|e| ExportError::InvalidRoot(format!("{}: {}", root, e)))?;
        let root_local_id = parsed.path().trim_start_matches('/').to_string();
        if root_local_id.is_empty() {
            return Err(ExportError::InvalidRoot(format!(
                "{}: root URL needs a path to derive its local id from",
                root
            )));
        }

        Ok(Self {
            root: root.to_string(),
            root_local_id,
            table: HashMap::new(),
        })
    }

    /// Compute and store the local identifier for a member subject.
    ///
    /// Fails with [`ExportError::NotAMember`] when `subject` is neither the root
    /// nor prefixed by the root followed by `/`. A failure here means the
    /// membership set was computed wrong upstream; it must never be swallowed.
    /// Registering the same subject twice is idempotent.
    pub fn register(&mut self, subject: &str) -> Result<()> {
        let local_id = self.compute_local_id(subject)?;
        self.table.insert(subject.to_string(), local_id);
        Ok(())
    }

    /// Return the local identifier for a registered subject, or the subject
    /// unchanged when it was never registered. External references stay
    /// absolute; this never fails.
    pub fn rewrite_if_member(&self, subject: &str) -> String {
        match self.table.get(subject) {
            Some(local_id) => local_id.clone(),
            None => subject.to_string(),
        }
    }

    /// Return the local identifier for a subject that must already be
    /// registered (the subject currently being projected).
    pub fn require_local_id(&self, subject: &str) -> Result<String> {
        self.table
            .get(subject)
            .cloned()
            .ok_or_else(|| ExportError::NotRegistered(subject.to_string()))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn compute_local_id(&self, subject: &str) -> Result<String> {
        if subject == self.root {
            return Ok(self.root_local_id.clone());
        }

        match subject.strip_prefix(&format!("{}/", self.root)) {
            Some(rest) => Ok(rest.to_string()),
            None => Err(ExportError::NotAMember(format!(
                "{} (root: {})",
                subject, self.root
            ))),
        }
    }
}
