//! Jobs list container

use mlboard_entity::{EntityKind, JobRecord};
use mlboard_store::{Action, AppState, EntityAction};
use tracing::debug;

use crate::containers::list::{list_props, push_base_filters, resolve_scope, ListProps, ListScope};
use crate::containers::{ContainerError, FetchRequest};
use crate::filters::FilterSet;

/// Container for a project's (or a user's bookmarked) job list
#[derive(Debug, Clone)]
pub struct JobsContainer {
    /// Mount props
    pub scope: ListScope,
}

impl JobsContainer {
    /// Create a container for the given scope
    #[must_use]
    pub fn new(scope: ListScope) -> Self {
        Self { scope }
    }

    /// Project store state into view props
    #[must_use]
    pub fn props(&self, state: &AppState) -> ListProps<JobRecord> {
        list_props(&self.scope, &state.auth, &state.jobs)
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
        debug!(filters = filters.len(), "jobs fetch");
        Ok(FetchRequest {
            kind: EntityKind::Job,
            scope,
            filters,
        })
    }

    /// Action for the view's `onCreate` callback
    #[must_use]
    pub fn on_create(&self, job: JobRecord) -> Action {
        Action::Job(EntityAction::Create(job))
    }

    /// Action for the view's `onUpdate` callback
    #[must_use]
    pub fn on_update(&self, job: JobRecord) -> Action {
        Action::Job(EntityAction::Update(job))
    }

    /// Action for the view's `onDelete` callback
    #[must_use]
    pub fn on_delete(&self, job: &JobRecord) -> Action {
        Action::Job(EntityAction::Delete(job.unique_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::FetchScope;
    use mlboard_store::AuthState;
    use mlboard_test_utils::{job_record, unique_name};

    #[test]
    fn props_read_last_fetched_and_auth() {
        let state = AppState::new(AuthState::signed_in("alice")).dispatch(&Action::Job(
            EntityAction::ReceiveList {
                items: vec![job_record("alice.proj1.jobs.3")],
                count: 1,
            },
        ));

        let container =
            JobsContainer::new(ListScope::for_user("alice").in_project(unique_name("alice.proj1")));
        let props = container.props(&state);

        assert_eq!(props.count, 1);
        assert!(props.is_current_user);
        assert!(!props.bookmarks);
        assert_eq!(props.items.len(), 1);
    }

    #[test]
    fn fetch_data_without_scope_fails_fast() {
        let container = JobsContainer::new(ListScope::for_user("alice"));
        assert!(matches!(
            container.fetch_data(None, None, None),
            Err(ContainerError::MissingScope)
        ));
    }

    #[test]
    fn fetch_data_targets_bookmarks_when_unscoped() {
        let container = JobsContainer::new(ListScope::for_user("alice").with_bookmarks());
        let request = container.fetch_data(Some(30), None, None).unwrap();

        assert_eq!(request.kind, EntityKind::Job);
        assert_eq!(
            request.scope,
            FetchScope::Bookmarks {
                user: "alice".to_string()
            }
        );
        assert_eq!(request.query_string(), "offset=30");
    }

    #[test]
    fn delete_action_carries_the_unique_name() {
        let container =
            JobsContainer::new(ListScope::for_user("alice").in_project(unique_name("alice.proj1")));
        let action = container.on_delete(&job_record("alice.proj1.jobs.3"));
        assert_eq!(
            action,
            Action::Job(EntityAction::Delete(unique_name("alice.proj1.jobs.3")))
        );
    }
}
