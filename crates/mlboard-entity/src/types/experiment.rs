//! Experiment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, overlay_list, Record};

/// A single experiment run inside a project
///
/// The `jobs` relation accumulates the unique names of the experiment's
/// worker jobs; it is populated by the companion reducer reacting to
/// experiment-job receive actions, not by experiment payloads alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Primary key: `owner.project.id`
    pub unique_name: UniqueName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Owning project's unique name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<UniqueName>,
    /// Owning group's unique name, absent for independent experiments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_group: Option<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    /// Declared hyperparameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declarations: Option<Value>,
    /// Last reported metric values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_metric: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tensorboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_jobs: Option<u64>,
    /// Unique names of the experiment's worker jobs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ExperimentRecord {
    const KIND: EntityKind = EntityKind::Experiment;

    fn unique_name(&self) -> &UniqueName {
        &self.unique_name
    }

    fn deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.deleted = Some(deleted);
    }

    fn set_bookmarked(&mut self, bookmarked: bool) {
        self.bookmarked = Some(bookmarked);
    }

    fn merge_from(&mut self, patch: Self) {
        self.unique_name = patch.unique_name;
        overlay(&mut self.id, patch.id);
        overlay(&mut self.uuid, patch.uuid);
        overlay(&mut self.name, patch.name);
        overlay(&mut self.user, patch.user);
        overlay(&mut self.project, patch.project);
        overlay(&mut self.experiment_group, patch.experiment_group);
        overlay(&mut self.description, patch.description);
        overlay_list(&mut self.tags, patch.tags);
        overlay(&mut self.created_at, patch.created_at);
        overlay(&mut self.updated_at, patch.updated_at);
        overlay(&mut self.started_at, patch.started_at);
        overlay(&mut self.finished_at, patch.finished_at);
        overlay(&mut self.last_status, patch.last_status);
        overlay(&mut self.declarations, patch.declarations);
        overlay(&mut self.last_metric, patch.last_metric);
        overlay(&mut self.config, patch.config);
        overlay(&mut self.resources, patch.resources);
        overlay(&mut self.has_tensorboard, patch.has_tensorboard);
        overlay(&mut self.num_jobs, patch.num_jobs);
        overlay_list(&mut self.jobs, patch.jobs);
        overlay(&mut self.bookmarked, patch.bookmarked);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}
