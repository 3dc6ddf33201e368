//! Declared datatypes of property resources.
//!
//! A string value is ambiguous between plain text and a reference to another
//! resource; only the property's declared datatype disambiguates. The enum is
//! closed: an unrecognized datatype URL becomes [`Datatype::Unsupported`] and is
//! treated as a non-reference, so new store datatypes degrade to pass-through
//! instead of silently matching a wildcard arm somewhere else.

use crate::urls::datatypes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Datatype {
    /// Reference to one resource (a subject URL).
    AtomicUrl,
    /// Array of resource references.
    ResourceArray,
    String,
    Slug,
    Markdown,
    Integer,
    Float,
    Boolean,
    Date,
    Timestamp,
    /// Datatype URL not in the known vocabulary; values pass through unchanged.
    Unsupported(String),
}

impl Datatype {
    pub fn from_url(url: &str) -> Self {
        match url {
            datatypes::ATOMIC_URL => Datatype::AtomicUrl,
            datatypes::RESOURCE_ARRAY => Datatype::ResourceArray,
            datatypes::STRING => Datatype::String,
            datatypes::SLUG => Datatype::Slug,
            datatypes::MARKDOWN => Datatype::Markdown,
            datatypes::INTEGER => Datatype::Integer,
            datatypes::FLOAT => Datatype::Float,
            datatypes::BOOLEAN => Datatype::Boolean,
            datatypes::DATE => Datatype::Date,
            datatypes::TIMESTAMP => Datatype::Timestamp,
            other => Datatype::Unsupported(other.to_string()),
        }
    }
}
