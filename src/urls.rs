//! Well-known URLs of the resource store vocabulary.
//!
//! Property resources, member lists, and reserved keys are all addressed by
//! absolute URLs in the store's core namespace. Keeping them in one module
//! mirrors the store's schema and keeps the rest of the crate free of string
//! literals.

/// Identity key of a fetched JSON-AD document. Never exported.
pub const ID_KEY: &str = "@id";

/// Reserved output key holding a projected object's ontology-local identifier.
pub const LOCAL_ID_KEY: &str = "localId";

/// Parent of a resource. Stripped from the exported root, which has no parent
/// once relocated.
pub const PARENT: &str = "https://atomicdata.dev/properties/parent";

/// Commit metadata of the last write. Store bookkeeping, not portable.
pub const LAST_COMMIT: &str = "https://atomicdata.dev/properties/lastCommit";

/// Declared datatype of a property resource.
pub const DATATYPE: &str = "https://atomicdata.dev/properties/datatype";

/// Member lists on an ontology root.
pub const CLASSES: &str = "https://atomicdata.dev/properties/classes";
pub const PROPERTIES: &str = "https://atomicdata.dev/properties/properties";
pub const INSTANCES: &str = "https://atomicdata.dev/properties/instances";

/// Human-readable naming properties, used for logging only.
pub const SHORTNAME: &str = "https://atomicdata.dev/properties/shortname";
pub const NAME: &str = "https://atomicdata.dev/properties/name";

/// Datatype URLs, matched into [`crate::datatype::Datatype`].
pub mod datatypes {
    pub const ATOMIC_URL: &str = "https://atomicdata.dev/datatypes/atomicURL";
    pub const RESOURCE_ARRAY: &str = "https://atomicdata.dev/datatypes/resourceArray";
    pub const STRING: &str = "https://atomicdata.dev/datatypes/string";
    pub const SLUG: &str = "https://atomicdata.dev/datatypes/slug";
    pub const MARKDOWN: &str = "https://atomicdata.dev/datatypes/markdown";
    pub const INTEGER: &str = "https://atomicdata.dev/datatypes/integer";
    pub const FLOAT: &str = "https://atomicdata.dev/datatypes/float";
    pub const BOOLEAN: &str = "https://atomicdata.dev/datatypes/boolean";
    pub const DATE: &str = "https://atomicdata.dev/datatypes/date";
    pub const TIMESTAMP: &str = "https://atomicdata.dev/datatypes/timestamp";
}
