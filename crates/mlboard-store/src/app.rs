//! Application state and dispatch
//!
//! [`AppState`] aggregates every entity table plus the signed-in-user
//! snapshot. Dispatching routes an action to its primary reducer and to
//! the companion reducers reacting to the same action. Tables not
//! addressed by an action keep their previous value untouched.

use mlboard_entity::{
    BuildRecord, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord, ProjectRecord,
};
use parking_lot::RwLock;
use tracing::debug;

use crate::actions::Action;
use crate::reducers::{experiments_into_groups, jobs_into_experiments, reduce, reduce_statuses};
use crate::table::{EntityTable, StatusTable};

/// Snapshot of the signed-in user
///
/// Containers compare their `user` prop against this to decide whether
/// mutating controls are shown. Authentication itself lives outside the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Signed-in username, empty when anonymous
    pub user: String,
}

impl AuthState {
    /// Create a snapshot for a signed-in user
    #[inline]
    #[must_use]
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    /// Whether `candidate` is the signed-in user
    #[inline]
    #[must_use]
    pub fn is_current_user(&self, candidate: &str) -> bool {
        !self.user.is_empty() && self.user == candidate
    }
}

/// The whole dashboard store value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Signed-in user snapshot
    pub auth: AuthState,
    /// Project table
    pub projects: EntityTable<ProjectRecord>,
    /// Experiment table
    pub experiments: EntityTable<ExperimentRecord>,
    /// Experiment group table
    pub groups: EntityTable<GroupRecord>,
    /// Job table
    pub jobs: EntityTable<JobRecord>,
    /// Build table
    pub builds: EntityTable<BuildRecord>,
    /// Experiment-job table
    pub experiment_jobs: EntityTable<ExperimentJobRecord>,
    /// Status table
    pub statuses: StatusTable,
}

impl AppState {
    /// Create an empty store for the given auth snapshot
    #[must_use]
    pub fn new(auth: AuthState) -> Self {
        Self {
            auth,
            ..Self::default()
        }
    }

    /// Apply one action, returning the next store value
    ///
    /// Routing is exhaustive: the primary table's reducer always runs,
    /// and companion reducers run for actions that maintain
    /// back-references (experiment jobs into experiments, experiments
    /// into groups).
    #[must_use]
    pub fn dispatch(mut self, action: &Action) -> Self {
        debug!(table = action.label(), "dispatch");
        match action {
            Action::Project(action) => {
                self.projects = reduce(self.projects, action);
            }
            Action::Experiment(action) => {
                self.experiments = reduce(self.experiments, action);
                self.groups = experiments_into_groups(self.groups, action);
            }
            Action::Group(action) => {
                self.groups = reduce(self.groups, action);
            }
            Action::Job(action) => {
                self.jobs = reduce(self.jobs, action);
            }
            Action::Build(action) => {
                self.builds = reduce(self.builds, action);
            }
            Action::ExperimentJob(action) => {
                self.experiment_jobs = reduce(self.experiment_jobs, action);
                self.experiments = jobs_into_experiments(self.experiments, action);
            }
            Action::Status(action) => {
                self.statuses = reduce_statuses(self.statuses, action);
            }
        }
        self
    }
}

/// Shared handle around the store for the UI event loop
///
/// Reducers stay pure; the handle only serializes dispatches behind a
/// write lock and hands out read access. Actions applied through one
/// handle hit the store strictly in dispatch order.
#[derive(Debug, Default)]
pub struct StoreHandle {
    state: RwLock<AppState>,
}

impl StoreHandle {
    /// Create a handle around an initial store value
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Apply one action to the shared store
    pub fn dispatch(&self, action: &Action) {
        let mut guard = self.state.write();
        let next = std::mem::take(&mut *guard).dispatch(action);
        *guard = next;
    }

    /// Read the store under the lock
    pub fn with_state<T>(&self, read: impl FnOnce(&AppState) -> T) -> T {
        read(&self.state.read())
    }

    /// Clone the current store value
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }
}
