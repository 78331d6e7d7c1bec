//! MLBoard Store
//!
//! Normalized entity store with pure reducer state machines.
//!
//! # Overview
//!
//! - [`EntityTable`]: per-kind store slice (`by_unique_name`,
//!   `unique_names`, `last_fetched`)
//! - [`Action`]: tagged union over every store mutation
//! - [`reducers`]: pure transition functions, one per table plus
//!   companions maintaining parent back-references
//! - [`AppState`]: the aggregated store value with exhaustive dispatch
//!   routing
//! - [`StoreHandle`]: lock-wrapped store for the UI event loop
//! - [`ingest`]: raw payload → normalization → dispatch
//!
//! # Example
//!
//! ```rust
//! use mlboard_entity::EntityKind;
//! use mlboard_store::{ingest_list, AppState};
//! use serde_json::json;
//!
//! let state = ingest_list(
//!     AppState::default(),
//!     EntityKind::Build,
//!     json!({
//!         "results": [{"unique_name": "alice.proj1.builds.1"}],
//!         "count": 5,
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(state.builds.last_fetched.count, 5);
//! ```

#![warn(missing_docs)]

pub mod actions;
pub mod app;
pub mod ingest;
pub mod reducers;
pub mod table;

// Re-exports
pub use actions::{
    Action, BuildAction, EntityAction, ExperimentAction, ExperimentJobAction, GroupAction,
    JobAction, ProjectAction, StatusAction,
};
pub use app::{AppState, AuthState, StoreHandle};
pub use ingest::{
    ingest_list, ingest_one, ingest_status, ingest_status_list, IngestError, ListBody,
};
pub use table::{EntityTable, LastFetched, LastFetchedIds, StatusTable};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for store consumers
    pub use crate::{
        Action, AppState, AuthState, EntityAction, EntityTable, IngestError, LastFetched,
        StatusAction, StatusTable, StoreHandle,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
