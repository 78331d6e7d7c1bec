//! Store actions
//!
//! Tagged unions describing every mutation the store accepts. One
//! [`EntityAction`] shape serves all name-keyed kinds; statuses have
//! their own smaller set. Reducers match these exhaustively.

use mlboard_entity::{
    BuildRecord, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord, ProjectRecord,
    Record, StatusRecord, UniqueName,
};

/// Actions accepted by a name-keyed entity table
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction<R: Record> {
    /// A list fetch went out; clear the previous result view
    RequestList,
    /// A list fetch arrived with a result page and total count
    ReceiveList {
        /// Normalized records in response order
        items: Vec<R>,
        /// Total count reported by the server
        count: u64,
    },
    /// A single-entity fetch arrived
    Receive(R),
    /// Optimistic local creation; the caller must not double-create
    Create(R),
    /// Partial update; provided fields overlay the stored record
    Update(R),
    /// Soft delete by name
    Delete(UniqueName),
    /// Mark the record bookmarked for the signed-in user
    Bookmark(UniqueName),
    /// Clear the bookmark flag
    Unbookmark(UniqueName),
}

/// Project table actions
pub type ProjectAction = EntityAction<ProjectRecord>;
/// Experiment table actions
pub type ExperimentAction = EntityAction<ExperimentRecord>;
/// Group table actions
pub type GroupAction = EntityAction<GroupRecord>;
/// Job table actions
pub type JobAction = EntityAction<JobRecord>;
/// Build table actions
pub type BuildAction = EntityAction<BuildRecord>;
/// Experiment-job table actions
pub type ExperimentJobAction = EntityAction<ExperimentJobRecord>;

/// Actions accepted by the status table
#[derive(Debug, Clone, PartialEq)]
pub enum StatusAction {
    /// A status list fetch went out
    RequestList,
    /// A status list fetch arrived
    ReceiveList {
        /// Status records in response order
        items: Vec<StatusRecord>,
        /// Total count reported by the server
        count: u64,
    },
    /// A single status arrived
    Receive(StatusRecord),
}

/// Top-level action routed by [`crate::app::AppState::dispatch`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Project table action
    Project(ProjectAction),
    /// Experiment table action
    Experiment(ExperimentAction),
    /// Group table action
    Group(GroupAction),
    /// Job table action
    Job(JobAction),
    /// Build table action
    Build(BuildAction),
    /// Experiment-job table action (also feeds the experiment companion)
    ExperimentJob(ExperimentJobAction),
    /// Status table action
    Status(StatusAction),
}

impl Action {
    /// Short label for trace output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Action::Project(_) => "project",
            Action::Experiment(_) => "experiment",
            Action::Group(_) => "group",
            Action::Job(_) => "job",
            Action::Build(_) => "build",
            Action::ExperimentJob(_) => "experiment_job",
            Action::Status(_) => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_name_the_target_table() {
        let action = Action::Job(JobAction::RequestList);
        assert_eq!(action.label(), "job");

        let action = Action::Status(StatusAction::RequestList);
        assert_eq!(action.label(), "status");
    }
}
