//! Experiments list container
//!
//! Carries the extra filter surface experiment lists expose: the group
//! scope plus the `metrics`, `declarations`, and `independent` flags. A
//! flag is forwarded only when its value is literally `true` or the
//! string `"true"`.

use mlboard_entity::{EntityKind, ExperimentRecord};
use mlboard_store::{Action, AppState, EntityAction};
use tracing::debug;

use crate::containers::list::{list_props, push_base_filters, resolve_scope, ListProps, ListScope};
use crate::containers::{ContainerError, FetchRequest};
use crate::filters::{is_true, FilterSet, FilterValue};

const FLAG_KEYS: [&str; 3] = ["metrics", "declarations", "independent"];

/// Container for a project's, group's, or bookmarked experiment list
#[derive(Debug, Clone)]
pub struct ExperimentsContainer {
    /// Mount props
    pub scope: ListScope,
}

impl ExperimentsContainer {
    /// Create a container for the given scope
    #[must_use]
    pub fn new(scope: ListScope) -> Self {
        Self { scope }
    }

    /// Project store state into view props
    #[must_use]
    pub fn props(&self, state: &AppState) -> ListProps<ExperimentRecord> {
        list_props(&self.scope, &state.auth, &state.experiments)
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
        extra_filters: Option<&FilterSet>,
    ) -> Result<FetchRequest, ContainerError> {
        let scope = resolve_scope(&self.scope)?;
        let mut filters = FilterSet::new();
        if let Some(group) = &self.scope.group_id {
            if !group.is_empty() {
                filters.insert("group".to_string(), FilterValue::Str(group.clone()));
            }
        }
        if let Some(extra) = extra_filters {
            for key in FLAG_KEYS {
                if let Some(value) = extra.get(key) {
                    if is_true(value) {
                        filters.insert(key.to_string(), value.clone());
                    }
                }
            }
        }
        push_base_filters(&mut filters, offset, query, sort);
        debug!(filters = filters.len(), "experiments fetch");
        Ok(FetchRequest {
            kind: EntityKind::Experiment,
            scope,
            filters,
        })
    }

    /// Action for the view's `onCreate` callback
    #[must_use]
    pub fn on_create(&self, experiment: ExperimentRecord) -> Action {
        Action::Experiment(EntityAction::Create(experiment))
    }

    /// Action for the view's `onUpdate` callback
    #[must_use]
    pub fn on_update(&self, experiment: ExperimentRecord) -> Action {
        Action::Experiment(EntityAction::Update(experiment))
    }

    /// Action for the view's `onDelete` callback
    #[must_use]
    pub fn on_delete(&self, experiment: &ExperimentRecord) -> Action {
        Action::Experiment(EntityAction::Delete(experiment.unique_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlboard_test_utils::unique_name;

    fn container_in_project() -> ExperimentsContainer {
        ExperimentsContainer::new(
            ListScope::for_user("alice").in_project(unique_name("alice.proj1")),
        )
    }

    #[test]
    fn group_scope_becomes_a_filter() {
        let container = ExperimentsContainer::new(
            ListScope::for_user("alice")
                .in_project(unique_name("alice.proj1"))
                .in_group("2"),
        );
        let request = container.fetch_data(None, None, None, None).unwrap();
        assert_eq!(request.query_string(), "group=2");
    }

    #[test]
    fn true_flags_are_forwarded_verbatim() {
        let mut extra = FilterSet::new();
        extra.insert("metrics".to_string(), FilterValue::Bool(true));
        extra.insert("declarations".to_string(), FilterValue::Str("true".into()));
        extra.insert("independent".to_string(), FilterValue::Str("True".into()));

        let request = container_in_project()
            .fetch_data(None, None, None, Some(&extra))
            .unwrap();

        assert_eq!(request.query_string(), "metrics=true&declarations=true");
    }

    #[test]
    fn filters_keep_canonical_order() {
        let mut extra = FilterSet::new();
        extra.insert("independent".to_string(), FilterValue::Bool(true));

        let container = ExperimentsContainer::new(
            ListScope::for_user("alice")
                .in_project(unique_name("alice.proj1"))
                .in_group("2"),
        );
        let request = container
            .fetch_data(Some(60), Some("status:running"), Some("-created_at"), Some(&extra))
            .unwrap();

        assert_eq!(
            request.query_string(),
            "group=2&independent=true&query=status:running&sort=-created_at&offset=60"
        );
    }

    #[test]
    fn missing_scope_fails_fast() {
        let container = ExperimentsContainer::new(ListScope::for_user("alice"));
        assert!(matches!(
            container.fetch_data(None, None, None, None),
            Err(ContainerError::MissingScope)
        ));
    }
}
