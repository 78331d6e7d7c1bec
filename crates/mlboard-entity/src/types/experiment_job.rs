//! Experiment worker job records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, Record};

/// A worker job belonging to an experiment (master, worker, ps roles)
///
/// Not bookmarkable; the default no-op `set_bookmarked` applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentJobRecord {
    /// Primary key: `owner.project.experiment_id.id`
    pub unique_name: UniqueName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Replica role inside the experiment (master, worker, ps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Owning experiment's unique name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExperimentJobRecord {
    /// Unique name of the owning experiment, derived from this job's name
    ///
    /// Prefers the explicit `experiment` field when the payload carried
    /// one; otherwise strips the trailing job segment.
    ///
    /// # Errors
    /// Returns a [`crate::name::NameError`] when the job's name does not
    /// have experiment-job arity.
    pub fn owning_experiment(&self) -> Result<UniqueName, crate::name::NameError> {
        if let Some(experiment) = &self.experiment {
            return Ok(experiment.clone());
        }
        crate::name::owning_experiment(&self.unique_name)
    }
}

impl Record for ExperimentJobRecord {
    const KIND: EntityKind = EntityKind::ExperimentJob;

    fn unique_name(&self) -> &UniqueName {
        &self.unique_name
    }

    fn deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.deleted = Some(deleted);
    }

    fn merge_from(&mut self, patch: Self) {
        self.unique_name = patch.unique_name;
        overlay(&mut self.id, patch.id);
        overlay(&mut self.uuid, patch.uuid);
        overlay(&mut self.role, patch.role);
        overlay(&mut self.experiment, patch.experiment);
        overlay(&mut self.definition, patch.definition);
        overlay(&mut self.created_at, patch.created_at);
        overlay(&mut self.updated_at, patch.updated_at);
        overlay(&mut self.started_at, patch.started_at);
        overlay(&mut self.finished_at, patch.finished_at);
        overlay(&mut self.last_status, patch.last_status);
        overlay(&mut self.resources, patch.resources);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn owning_experiment_prefers_explicit_field() {
        let job: ExperimentJobRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.4.7",
            "experiment": "alice.proj1.4",
        }))
        .unwrap();
        assert_eq!(job.owning_experiment().unwrap().as_str(), "alice.proj1.4");
    }

    #[test]
    fn owning_experiment_derives_from_name() {
        let job: ExperimentJobRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.4.7",
        }))
        .unwrap();
        assert_eq!(job.owning_experiment().unwrap().as_str(), "alice.proj1.4");
    }

    #[test]
    fn bookmarking_is_a_no_op() {
        let mut job: ExperimentJobRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.4.7",
        }))
        .unwrap();
        job.set_bookmarked(true);
        assert!(job.extra.is_empty());
    }
}
