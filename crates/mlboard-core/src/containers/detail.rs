//! Detail containers for single entities

use mlboard_entity::{group_unique_name, BuildRecord, EntityKind, GroupRecord, UniqueName};
use mlboard_store::{Action, AppState, EntityAction};

use crate::containers::{ContainerError, DetailRequest};
use crate::selectors::select_detail;

/// Container for a single build's detail view
///
/// Mounted with the build's unique name from the route.
#[derive(Debug, Clone)]
pub struct BuildDetailContainer {
    /// The build's unique name
    pub build_name: UniqueName,
}

impl BuildDetailContainer {
    /// Create a container for the named build
    #[must_use]
    pub fn new(build_name: UniqueName) -> Self {
        Self { build_name }
    }

    /// The build record, or `None` while not loaded
    #[must_use]
    pub fn props<'a>(&self, state: &'a AppState) -> Option<&'a BuildRecord> {
        select_detail(&state.builds, &self.build_name)
    }

    /// Build the detail query for the view's `fetchData` callback
    ///
    /// Splits the unique name into owner, project, and id; the resource
    /// segment is implied by the kind.
    ///
    /// # Errors
    /// Returns a name error when the route's name does not have build
    /// arity.
    pub fn fetch_data(&self) -> Result<DetailRequest, ContainerError> {
        let name = UniqueName::parse_for(EntityKind::Build, self.build_name.as_str())?;
        let segments = name.segments();
        Ok(DetailRequest {
            kind: EntityKind::Build,
            owner: segments[0].to_string(),
            project: segments[1].to_string(),
            id: segments[3].to_string(),
        })
    }
}

/// Container for a single experiment group's detail view
///
/// Mounted with the route parameters rather than a pre-built name.
#[derive(Debug, Clone)]
pub struct GroupDetailContainer {
    /// Owner username from the route
    pub user: String,
    /// Project name from the route
    pub project_name: String,
    /// Group id from the route
    pub group_id: String,
}

impl GroupDetailContainer {
    /// Create a container from route parameters
    #[must_use]
    pub fn new(
        user: impl Into<String>,
        project_name: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            project_name: project_name.into(),
            group_id: group_id.into(),
        }
    }

    /// The group's unique name derived from the route parameters
    ///
    /// # Errors
    /// Returns a name error when a route segment is malformed.
    pub fn group_name(&self) -> Result<UniqueName, ContainerError> {
        Ok(group_unique_name(
            &self.user,
            &self.project_name,
            &self.group_id,
        )?)
    }

    /// The group record, or `None` while not loaded
    #[must_use]
    pub fn props<'a>(&self, state: &'a AppState) -> Option<&'a GroupRecord> {
        let name = self.group_name().ok()?;
        select_detail(&state.groups, &name)
    }

    /// Build the detail query for the view's `fetchData` callback
    ///
    /// # Errors
    /// Returns a name error when a route segment is malformed.
    pub fn fetch_data(&self) -> Result<DetailRequest, ContainerError> {
        // Validate the segments before handing them to the API client.
        self.group_name()?;
        Ok(DetailRequest {
            kind: EntityKind::Group,
            owner: self.user.clone(),
            project: self.project_name.clone(),
            id: self.group_id.clone(),
        })
    }

    /// Action for the view's `bookmark` callback
    ///
    /// # Errors
    /// Returns a name error when a route segment is malformed.
    pub fn bookmark(&self) -> Result<Action, ContainerError> {
        Ok(Action::Group(EntityAction::Bookmark(self.group_name()?)))
    }

    /// Action for the view's `unbookmark` callback
    ///
    /// # Errors
    /// Returns a name error when a route segment is malformed.
    pub fn unbookmark(&self) -> Result<Action, ContainerError> {
        Ok(Action::Group(EntityAction::Unbookmark(self.group_name()?)))
    }

    /// Action for the view's `onDelete` callback
    ///
    /// # Errors
    /// Returns a name error when a route segment is malformed.
    pub fn on_delete(&self) -> Result<Action, ContainerError> {
        Ok(Action::Group(EntityAction::Delete(self.group_name()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlboard_entity::NameError;
    use mlboard_test_utils::{build_record, group_record, unique_name};

    #[test]
    fn build_detail_splits_route_name() {
        let container = BuildDetailContainer::new(unique_name("alice.proj1.builds.1"));
        let request = container.fetch_data().unwrap();
        assert_eq!(request.owner, "alice");
        assert_eq!(request.project, "proj1");
        assert_eq!(request.id, "1");
    }

    #[test]
    fn build_detail_rejects_wrong_arity() {
        let container = BuildDetailContainer::new(unique_name("alice.proj1.1"));
        assert!(matches!(
            container.fetch_data(),
            Err(ContainerError::BadName(NameError::WrongArity { .. }))
        ));
    }

    #[test]
    fn build_detail_props_require_membership() {
        let container = BuildDetailContainer::new(unique_name("alice.proj1.builds.1"));
        let state = AppState::default();
        assert!(container.props(&state).is_none());

        let state = state.dispatch(&Action::Build(EntityAction::Receive(build_record(
            "alice.proj1.builds.1",
        ))));
        assert!(container.props(&state).is_some());
    }

    #[test]
    fn group_detail_derives_name_from_route() {
        let container = GroupDetailContainer::new("alice", "proj1", "2");
        assert_eq!(
            container.group_name().unwrap(),
            unique_name("alice.proj1.2")
        );

        let state = AppState::default().dispatch(&Action::Group(EntityAction::Receive(
            group_record("alice.proj1.2"),
        )));
        assert!(container.props(&state).is_some());
    }

    #[test]
    fn group_bookmark_actions_target_the_group() {
        let container = GroupDetailContainer::new("alice", "proj1", "2");
        assert_eq!(
            container.bookmark().unwrap(),
            Action::Group(EntityAction::Bookmark(unique_name("alice.proj1.2")))
        );
        assert_eq!(
            container.unbookmark().unwrap(),
            Action::Group(EntityAction::Unbookmark(unique_name("alice.proj1.2")))
        );
    }
}
