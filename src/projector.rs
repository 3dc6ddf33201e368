//! Resource projection: one subject's property/value set converted into a
//! plain JSON object with ontology-local reference rewriting.

use serde_json::{Map, Value};
use tracing::debug;

use crate::datatype::Datatype;
use crate::errors::Result;
use crate::mapper::LocalIdMapper;
use crate::store::ResourceStore;
use crate::urls;

/// Project `subject` into a portable JSON object.
///
/// Property keys and reference values pointing into the ontology are rewritten
/// to local identifiers; external references stay absolute. Whether a string
/// value is a reference at all cannot be decided from its shape, so each
/// property's own resource is fetched to read its declared datatype.
///
/// The subject itself must already be registered in `mapper`; the reserved
/// `localId` key is always set, and set last.
pub async fn project(
    subject: &str,
    store: &dyn ResourceStore,
    mapper: &LocalIdMapper,
) -> Result<Map<String, Value>> {
    let resource = store.get_resource(subject).await?;
    debug!(subject, title = resource.title(), "projecting resource");

    let mut projected = Map::new();

    for (property, value) in resource.prop_vals() {
        // Identity and commit metadata never belong in a portable export.
        if property == urls::ID_KEY || property == urls::LAST_COMMIT {
            continue;
        }

        let datatype = store.get_resource(property).await?.datatype();
        let key = mapper.rewrite_if_member(property);
        let rewritten = rewrite_value(value, datatype, mapper);

        projected.insert(key, rewritten);
    }

    // Always present and always last, so the object can be re-anchored on
    // import regardless of property iteration order.
    projected.insert(
        urls::LOCAL_ID_KEY.to_string(),
        Value::String(mapper.require_local_id(subject)?),
    );

    Ok(projected)
}

/// Rewrite a value when, and only when, its property's datatype marks it as a
/// reference. Everything else is copied unchanged, including values whose
/// shape does not match the declared datatype.
fn rewrite_value(value: &Value, datatype: Option<Datatype>, mapper: &LocalIdMapper) -> Value {
    match (datatype, value) {
        (Some(Datatype::AtomicUrl), Value::String(subject)) => {
            Value::String(mapper.rewrite_if_member(subject))
        }
        (Some(Datatype::ResourceArray), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::String(subject) => Value::String(mapper.rewrite_if_member(subject)),
                    other => other.clone(),
                })
                .collect(),
        ),
        (_, other) => other.clone(),
    }
}
