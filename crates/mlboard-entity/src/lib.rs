//! MLBoard Entity System
//!
//! Typed entity records and unique-name indexing for the dashboard store.
//!
//! # Core Concepts
//!
//! - [`UniqueName`]: hierarchical primary key encoding an entity's
//!   ownership path (`owner.project.builds.1`)
//! - [`EntityKind`]: the entity kinds known to the store, each with a
//!   fixed unique-name arity
//! - [`Record`]: payload-shaped records with soft-delete and
//!   partial-update merge semantics
//!
//! # Example
//!
//! ```rust
//! use mlboard_entity::{EntityKind, UniqueName};
//!
//! let name = UniqueName::parse_for(EntityKind::Build, "alice.proj1.builds.1").unwrap();
//! assert_eq!(name.segments(), vec!["alice", "proj1", "builds", "1"]);
//! assert_eq!(name.parent().unwrap().as_str(), "alice.proj1.builds");
//! ```

#![warn(missing_docs)]

pub mod name;
pub mod record;
pub mod types;

// Re-exports
pub use name::{
    build_unique_name, experiment_unique_name, group_unique_name, job_unique_name,
    owning_experiment, owning_project, project_unique_name, EntityKind, NameError, UniqueName,
    SEPARATOR,
};
pub use record::Record;
pub use types::{
    BuildRecord, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord, ProjectRecord,
    StatusRecord,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for entity handling
    pub use crate::{
        BuildRecord, EntityKind, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord,
        NameError, ProjectRecord, Record, StatusRecord, UniqueName,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use proptest::prelude::*;

    fn segment_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,11}"
    }

    proptest! {
        #[test]
        fn prop_name_round_trips_through_segments(
            segments in proptest::collection::vec(segment_strategy(), 1..6)
        ) {
            let name = UniqueName::from_segments(&segments).unwrap();
            let split: Vec<String> =
                name.segments().into_iter().map(str::to_string).collect();
            prop_assert_eq!(split, segments);
        }

        #[test]
        fn prop_child_then_parent_recovers_name(
            segments in proptest::collection::vec(segment_strategy(), 1..5),
            child in segment_strategy()
        ) {
            let name = UniqueName::from_segments(&segments).unwrap();
            let derived = name.child(&child).unwrap();
            prop_assert_eq!(derived.parent(), Some(name));
        }
    }

    #[test]
    fn kinds_cover_all_arities() {
        let kinds = [
            EntityKind::Project,
            EntityKind::Experiment,
            EntityKind::Group,
            EntityKind::Job,
            EntityKind::Build,
            EntityKind::ExperimentJob,
        ];
        for kind in kinds {
            assert!(kind.arity().is_some(), "{kind} must be name-keyed");
        }
        assert!(EntityKind::Status.arity().is_none());
    }
}
