//! Experiment-groups list container

use mlboard_entity::{EntityKind, GroupRecord};
use mlboard_store::{Action, AppState, EntityAction};

use crate::containers::list::{list_props, push_base_filters, resolve_scope, ListProps, ListScope};
use crate::containers::{ContainerError, FetchRequest};
use crate::filters::FilterSet;

/// Container for a project's (or bookmarked) experiment-group list
#[derive(Debug, Clone)]
pub struct GroupsContainer {
    /// Mount props
    pub scope: ListScope,
}

impl GroupsContainer {
    /// Create a container for the given scope
    #[must_use]
    pub fn new(scope: ListScope) -> Self {
        Self { scope }
    }

    /// Project store state into view props
    #[must_use]
    pub fn props(&self, state: &AppState) -> ListProps<GroupRecord> {
        list_props(&self.scope, &state.auth, &state.groups)
    }

    /// Build the list query for the view's `fetchData` callback
    ///
    /// # Errors
    /// Returns [`ContainerError::MissingScope`] when the container has
    /// neither a project name nor the bookmarks flag.
    pub fn fetch_data(
        &self,
        offset: Option<u64>,
        query: Option<&str>,
        sort: Option<&str>,
    ) -> Result<FetchRequest, ContainerError> {
        let scope = resolve_scope(&self.scope)?;
        let mut filters = FilterSet::new();
        push_base_filters(&mut filters, offset, query, sort);
        Ok(FetchRequest {
            kind: EntityKind::Group,
            scope,
            filters,
        })
    }

    /// Action for the view's `onCreate` callback
    #[must_use]
    pub fn on_create(&self, group: GroupRecord) -> Action {
        Action::Group(EntityAction::Create(group))
    }

    /// Action for the view's `onUpdate` callback
    #[must_use]
    pub fn on_update(&self, group: GroupRecord) -> Action {
        Action::Group(EntityAction::Update(group))
    }

    /// Action for the view's `onDelete` callback
    #[must_use]
    pub fn on_delete(&self, group: &GroupRecord) -> Action {
        Action::Group(EntityAction::Delete(group.unique_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlboard_test_utils::unique_name;

    #[test]
    fn project_scope_lists_groups() {
        let container = GroupsContainer::new(
            ListScope::for_user("alice").in_project(unique_name("alice.proj1")),
        );
        let request = container
            .fetch_data(None, Some("status:running"), None)
            .unwrap();
        assert_eq!(request.kind, EntityKind::Group);
        assert_eq!(request.query_string(), "query=status:running");
    }
}
