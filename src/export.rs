//! Export driver: membership collection, mapper population, concurrent
//! projection, and output assembly.
//!
//! The mapper is populated fully before any projection starts; projections
//! then share it read-only, so member subjects can be fetched concurrently.
//! Any single failure aborts the whole run, and the output file is written
//! only after the complete object sequence is assembled.

use std::fs;
use std::path::Path;

use futures::{stream, StreamExt, TryStreamExt};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::Result;
use crate::mapper::LocalIdMapper;
use crate::projector;
use crate::store::{Resource, ResourceStore};
use crate::urls;

/// Member subjects of an ontology root, in export order:
/// classes, then properties, then instances.
pub fn collect_members(root: &Resource) -> Vec<String> {
    let mut members = root.classes();
    members.extend(root.properties());
    members.extend(root.instances());
    members
}

/// Export the ontology rooted at `root_subject` as an ordered sequence of
/// projected objects: root first, then classes, properties, and instances.
pub async fn export_ontology(
    root_subject: &str,
    store: &dyn ResourceStore,
) -> Result<Vec<Map<String, Value>>> {
    let root = store.get_resource(root_subject).await?;
    let members = collect_members(&root);
    info!(
        root = root_subject,
        title = root.title(),
        members = members.len(),
        "exporting ontology"
    );

    // Membership registration happens up front and synchronously. A NotAMember
    // failure here means the root listed a subject outside its own namespace.
    let mut mapper = LocalIdMapper::new(root_subject)?;
    mapper.register(root_subject)?;
    for member in &members {
        mapper.register(member)?;
    }

    let mut root_object = projector::project(root_subject, store, &mapper).await?;
    // The exported ontology has no parent once relocated.
    root_object.remove(urls::PARENT);

    // Independent reads; dispatch concurrently but keep member order.
    let mapper = &mapper;
    let projected: Vec<Map<String, Value>> = stream::iter(
        members
            .iter()
            .map(|subject| projector::project(subject, store, mapper)),
    )
    .buffered(store.concurrency_limit())
    .try_collect()
    .await?;

    let mut objects = Vec::with_capacity(projected.len() + 1);
    objects.push(root_object);
    objects.extend(projected);

    info!(objects = objects.len(), "export assembled");
    Ok(objects)
}

/// Serialize the assembled sequence and write it in one step.
pub fn write_export(path: &Path, objects: &[Map<String, Value>]) -> Result<()> {
    let json = serde_json::to_string_pretty(objects)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "export written");
    Ok(())
}

/// Run a full export: assemble everything, then write. A failure anywhere
/// leaves the output path untouched.
pub async fn export_to_file(
    root_subject: &str,
    store: &dyn ResourceStore,
    path: &Path,
) -> Result<()> {
    let objects = export_ontology(root_subject, store).await?;
    write_export(path, &objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_members_order() {
        let root = Resource::new(
            "https://x.test/onto",
            vec![
                (urls::INSTANCES.to_string(), json!(["https://x.test/onto/rex"])),
                (urls::CLASSES.to_string(), json!(["https://x.test/onto/Animal"])),
                (urls::PROPERTIES.to_string(), json!(["https://x.test/onto/legs"])),
            ],
        );

        assert_eq!(
            collect_members(&root),
            vec![
                "https://x.test/onto/Animal",
                "https://x.test/onto/legs",
                "https://x.test/onto/rex",
            ]
        );
    }

    #[test]
    fn test_collect_members_tolerates_missing_lists() {
        let root = Resource::new("https://x.test/onto", vec![]);
        assert!(collect_members(&root).is_empty());
    }
}
