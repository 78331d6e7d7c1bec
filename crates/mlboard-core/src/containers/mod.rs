//! Containers binding store state to view props
//!
//! Each container mirrors one view: it projects the store into props and
//! constructs the actions and fetch requests the view's callbacks
//! dispatch. Containers never talk to the network; a [`FetchRequest`] or
//! [`DetailRequest`] describes the query for the API client to issue.

mod builds;
mod detail;
mod experiments;
mod groups;
mod jobs;
mod list;

pub use builds::BuildsContainer;
pub use detail::{BuildDetailContainer, GroupDetailContainer};
pub use experiments::ExperimentsContainer;
pub use groups::GroupsContainer;
pub use jobs::JobsContainer;
pub use list::{ListProps, ListScope};

use mlboard_entity::{EntityKind, NameError, UniqueName};

use crate::filters::{render_query, FilterSet};

/// Which backend query a list fetch targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchScope {
    /// Entities of one project
    Project(UniqueName),
    /// The user's bookmarked entities
    Bookmarks {
        /// Username whose bookmarks are fetched
        user: String,
    },
}

/// A list query ready for the API client
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Entity kind being listed
    pub kind: EntityKind,
    /// Project or bookmarks scope
    pub scope: FetchScope,
    /// Query filters, in insertion order
    pub filters: FilterSet,
}

impl FetchRequest {
    /// Render the filters as a query string (no leading `?`)
    #[must_use]
    pub fn query_string(&self) -> String {
        render_query(&self.filters)
    }
}

/// A single-entity query ready for the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Entity kind being fetched
    pub kind: EntityKind,
    /// Owner segment of the unique name
    pub owner: String,
    /// Project segment of the unique name
    pub project: String,
    /// Entity id segment of the unique name
    pub id: String,
}

/// Container misconfiguration and name errors
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// Neither a project scope nor a bookmarks flag was supplied
    #[error("list container expects either a project name or bookmarks")]
    MissingScope,

    /// A unique name prop failed validation
    #[error(transparent)]
    BadName(#[from] NameError),
}
