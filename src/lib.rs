//! # ontoport - portable ontology export
//!
//! Exports a self-contained ontology (a root resource plus its classes,
//! properties, and instances) from a remote resource store into one JSON
//! document whose internal references are short, ontology-local identifiers.
//! The exported document can be re-imported under a different store root
//! without collisions or dangling absolute links.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   member list    ┌───────────────┐
//! │    export    │ ───────────────► │ LocalIdMapper │
//! │   (driver)   │                  └───────▲───────┘
//! └──────┬───────┘                          │ rewrite
//!        │ per subject              ┌───────┴───────┐
//!        └────────────────────────► │   projector   │
//!                                   └───────┬───────┘
//!                                           │ get_resource
//!                                   ┌───────▼───────┐
//!                                   │ ResourceStore │ (Http / Memory)
//!                                   └───────────────┘
//! ```
//!
//! The mapper is populated with the full membership set before any projection
//! runs, so projections only ever read it and can be dispatched concurrently.

pub mod datatype;
pub mod errors;
pub mod export;
pub mod mapper;
pub mod projector;
pub mod store;
pub mod urls;

pub use datatype::Datatype;
pub use errors::{ExportError, Result};
pub use export::{export_ontology, export_to_file, write_export};
pub use mapper::LocalIdMapper;
pub use store::{HttpStore, MemoryStore, Resource, ResourceStore};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
