//! MLBoard Normalization
//!
//! Declarative decomposition of nested API payloads into flat,
//! reference-linked per-type tables.
//!
//! # Overview
//!
//! A fixed [`schema`] maps each entity kind to its identifying field and
//! its relation fields. The [`normalizer`] walks a payload against that
//! schema, extracts embedded entities into flat tables keyed by unique
//! name, and replaces relation fields with the unique names of the
//! referenced entities.
//!
//! # Example
//!
//! ```rust
//! use mlboard_entity::EntityKind;
//! use mlboard_normalize::normalize_one;
//! use serde_json::json;
//!
//! let (name, batch) = normalize_one(
//!     EntityKind::Experiment,
//!     json!({
//!         "unique_name": "alice.proj1.4",
//!         "jobs": [{"unique_name": "alice.proj1.4.7", "role": "master"}],
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(name.as_str(), "alice.proj1.4");
//! assert_eq!(batch.experiment_jobs.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod normalizer;
pub mod schema;

// Re-exports
pub use normalizer::{
    normalize_list, normalize_one, normalize_status, NormalizeError, NormalizedBatch,
    NormalizedList,
};
pub use schema::{schema_for, EntitySchema, Relation, RelationArity};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
