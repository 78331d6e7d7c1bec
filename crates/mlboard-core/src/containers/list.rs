//! Shared list-container plumbing

use mlboard_entity::{Record, UniqueName};
use mlboard_store::{AuthState, EntityTable};

use crate::containers::{ContainerError, FetchScope};
use crate::filters::{FilterSet, FilterValue};
use crate::selectors::select_last_fetched;

/// Identity and scope props a list container is mounted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScope {
    /// User whose page is being viewed
    pub user: String,
    /// Project scope, when the list is project-bound
    pub project_name: Option<UniqueName>,
    /// Group scope for experiment lists
    pub group_id: Option<String>,
    /// Whether the view shows its filter bar
    pub use_filters: Option<bool>,
    /// Whether the list shows bookmarks instead of a project
    pub bookmarks: Option<bool>,
}

impl ListScope {
    /// Scope for a user's page
    #[must_use]
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Self::default()
        }
    }

    /// Bind the list to a project
    #[must_use]
    pub fn in_project(mut self, project_name: UniqueName) -> Self {
        self.project_name = Some(project_name);
        self
    }

    /// Bind experiment lists to a group
    #[must_use]
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Show the user's bookmarks instead of a project listing
    #[must_use]
    pub fn with_bookmarks(mut self) -> Self {
        self.bookmarks = Some(true);
        self
    }

    /// Show the filter bar
    #[must_use]
    pub fn with_filters(mut self) -> Self {
        self.use_filters = Some(true);
        self
    }
}

/// View-ready list projection plus container flags
#[derive(Debug, Clone, PartialEq)]
pub struct ListProps<R> {
    /// Records of the latest fetch; `None` where a name is not loaded
    pub items: Vec<Option<R>>,
    /// Total count reported by the server
    pub count: u64,
    /// Whether the page belongs to the signed-in user
    pub is_current_user: bool,
    /// Whether the view shows its filter bar
    pub use_filters: bool,
    /// Whether the list shows bookmarks
    pub bookmarks: bool,
}

// One props builder serves every list container.
pub(crate) fn list_props<R: Record>(
    scope: &ListScope,
    auth: &AuthState,
    table: &EntityTable<R>,
) -> ListProps<R> {
    let (items, count) = select_last_fetched(table);
    ListProps {
        items,
        count,
        is_current_user: auth.is_current_user(&scope.user),
        use_filters: scope.use_filters.unwrap_or(false),
        bookmarks: scope.bookmarks.unwrap_or(false),
    }
}

/// Resolve the query scope, failing fast on misconfiguration
///
/// Bookmarks win only when no project is bound; a container with neither
/// is a configuration error, not an empty list.
pub(crate) fn resolve_scope(scope: &ListScope) -> Result<FetchScope, ContainerError> {
    if scope.project_name.is_none() && scope.bookmarks.unwrap_or(false) {
        return Ok(FetchScope::Bookmarks {
            user: scope.user.clone(),
        });
    }
    match &scope.project_name {
        Some(project) => Ok(FetchScope::Project(project.clone())),
        None => Err(ContainerError::MissingScope),
    }
}

// Trailing filters shared by every list fetch: query, sort, offset. An
// offset of zero is the default page and stays out of the query.
pub(crate) fn push_base_filters(
    filters: &mut FilterSet,
    offset: Option<u64>,
    query: Option<&str>,
    sort: Option<&str>,
) {
    if let Some(query) = query {
        if !query.is_empty() {
            filters.insert("query".to_string(), FilterValue::Str(query.to_string()));
        }
    }
    if let Some(sort) = sort {
        if !sort.is_empty() {
            filters.insert("sort".to_string(), FilterValue::Str(sort.to_string()));
        }
    }
    if let Some(offset) = offset {
        if offset > 0 {
            filters.insert(
                "offset".to_string(),
                FilterValue::Int(i64::try_from(offset).unwrap_or(i64::MAX)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlboard_test_utils::unique_name;

    #[test]
    fn scope_resolution_prefers_project() {
        let scope = ListScope::for_user("alice")
            .in_project(unique_name("alice.proj1"))
            .with_bookmarks();
        assert_eq!(
            resolve_scope(&scope).unwrap(),
            FetchScope::Project(unique_name("alice.proj1"))
        );
    }

    #[test]
    fn bookmarks_apply_without_project() {
        let scope = ListScope::for_user("alice").with_bookmarks();
        assert_eq!(
            resolve_scope(&scope).unwrap(),
            FetchScope::Bookmarks {
                user: "alice".to_string()
            }
        );
    }

    #[test]
    fn missing_scope_is_an_error() {
        let scope = ListScope::for_user("alice");
        assert!(matches!(
            resolve_scope(&scope),
            Err(ContainerError::MissingScope)
        ));
    }

    #[test]
    fn base_filters_skip_empty_and_zero() {
        let mut filters = FilterSet::new();
        push_base_filters(&mut filters, Some(0), Some(""), None);
        assert!(filters.is_empty());

        push_base_filters(&mut filters, Some(30), Some("status:running"), Some("-created_at"));
        let keys: Vec<&str> = filters.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["query", "sort", "offset"]);
    }
}
