//! Builds list container

use mlboard_entity::{BuildRecord, EntityKind};
use mlboard_store::{Action, AppState, EntityAction};

use crate::containers::list::{list_props, push_base_filters, resolve_scope, ListProps, ListScope};
use crate::containers::{ContainerError, FetchRequest};
use crate::filters::FilterSet;

/// Container for a project's (or bookmarked) build list
#[derive(Debug, Clone)]
pub struct BuildsContainer {
    /// Mount props
    pub scope: ListScope,
}

impl BuildsContainer {
    /// Create a container for the given scope
    #[must_use]
    pub fn new(scope: ListScope) -> Self {
        Self { scope }
    }

    /// Project store state into view props
    #[must_use]
    pub fn props(&self, state: &AppState) -> ListProps<BuildRecord> {
        list_props(&self.scope, &state.auth, &state.builds)
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
            kind: EntityKind::Build,
            scope,
            filters,
        })
    }

    /// Action for the view's `onCreate` callback
    #[must_use]
    pub fn on_create(&self, build: BuildRecord) -> Action {
        Action::Build(EntityAction::Create(build))
    }

    /// Action for the view's `onUpdate` callback
    #[must_use]
    pub fn on_update(&self, build: BuildRecord) -> Action {
        Action::Build(EntityAction::Update(build))
    }

    /// Action for the view's `onDelete` callback
    #[must_use]
    pub fn on_delete(&self, build: &BuildRecord) -> Action {
        Action::Build(EntityAction::Delete(build.unique_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlboard_store::AuthState;
    use mlboard_test_utils::{build_record, unique_name};

    #[test]
    fn missing_record_surfaces_as_none_item() {
        // The fetch tracked two names but only one record arrived intact.
        let state = AppState::new(AuthState::signed_in("alice")).dispatch(&Action::Build(
            EntityAction::ReceiveList {
                items: vec![build_record("alice.proj1.builds.1")],
                count: 2,
            },
        ));
        let container = BuildsContainer::new(
            ListScope::for_user("alice").in_project(unique_name("alice.proj1")),
        );

        let props = container.props(&state);
        assert_eq!(props.count, 2);
        assert_eq!(props.items.len(), 1);
        assert!(props.items[0].is_some());
    }
}
