//! MLBoard Core
//!
//! Selectors, containers, and dashboard configuration: the layer that
//! projects the normalized store into view-ready props and turns view
//! callbacks into actions and fetch requests.
//!
//! # Overview
//!
//! - [`selectors`]: read the store; `last_fetched` is the source of truth
//!   for list views, membership gates detail views
//! - [`containers`]: per-view bindings (props + `fetchData` + action
//!   callbacks) with fail-fast scope validation
//! - [`filters`]: ordered query filters and the literal-`true` flag rule
//! - [`config`]: dashboard configuration with TOML loading
//!
//! # Example
//!
//! ```rust
//! use mlboard_core::containers::{JobsContainer, ListScope};
//! use mlboard_entity::UniqueName;
//!
//! let scope = ListScope::for_user("alice")
//!     .in_project(UniqueName::parse("alice.proj1").unwrap());
//! let request = JobsContainer::new(scope)
//!     .fetch_data(Some(30), Some("status:running"), None)
//!     .unwrap();
//!
//! assert_eq!(request.query_string(), "query=status:running&offset=30");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod containers;
pub mod filters;
pub mod selectors;

// Re-exports
pub use config::{ConfigError, DashboardConfig};
pub use containers::{
    BuildDetailContainer, BuildsContainer, ContainerError, DetailRequest, ExperimentsContainer,
    FetchRequest, FetchScope, GroupDetailContainer, GroupsContainer, JobsContainer, ListProps,
    ListScope,
};
pub use filters::{is_true, render_query, FilterSet, FilterValue};
pub use selectors::{select_detail, select_last_fetched, select_statuses};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for view bindings
    pub use crate::{
        ContainerError, DashboardConfig, FetchRequest, FetchScope, FilterSet, FilterValue,
        ListProps, ListScope,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
