//! Experiment group records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, overlay_list, Record};

/// A group of experiments driven by a search algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Max experiments scheduled concurrently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<u64>,
    /// Raw specification content driving the group's search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
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
    pub current_iteration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_scheduled_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pending_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_running_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_succeeded_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_failed_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_stopped_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tensorboard: Option<bool>,
    /// Unique names of the group's experiments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiments: Vec<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for GroupRecord {
    const KIND: EntityKind = EntityKind::Group;

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
        overlay(&mut self.description, patch.description);
        overlay_list(&mut self.tags, patch.tags);
        overlay(&mut self.concurrency, patch.concurrency);
        overlay(&mut self.content, patch.content);
        overlay(&mut self.created_at, patch.created_at);
        overlay(&mut self.updated_at, patch.updated_at);
        overlay(&mut self.started_at, patch.started_at);
        overlay(&mut self.finished_at, patch.finished_at);
        overlay(&mut self.last_status, patch.last_status);
        overlay(&mut self.current_iteration, patch.current_iteration);
        overlay(&mut self.search_algorithm, patch.search_algorithm);
        overlay(&mut self.num_experiments, patch.num_experiments);
        overlay(
            &mut self.num_scheduled_experiments,
            patch.num_scheduled_experiments,
        );
        overlay(
            &mut self.num_pending_experiments,
            patch.num_pending_experiments,
        );
        overlay(
            &mut self.num_running_experiments,
            patch.num_running_experiments,
        );
        overlay(
            &mut self.num_succeeded_experiments,
            patch.num_succeeded_experiments,
        );
        overlay(
            &mut self.num_failed_experiments,
            patch.num_failed_experiments,
        );
        overlay(
            &mut self.num_stopped_experiments,
            patch.num_stopped_experiments,
        );
        overlay(&mut self.has_tensorboard, patch.has_tensorboard);
        overlay_list(&mut self.experiments, patch.experiments);
        overlay(&mut self.bookmarked, patch.bookmarked);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn counters_merge_independently() {
        let mut base: GroupRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.2",
            "num_experiments": 10,
            "num_running_experiments": 4,
        }))
        .unwrap();
        let patch: GroupRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.2",
            "num_running_experiments": 2,
            "num_succeeded_experiments": 8,
        }))
        .unwrap();

        base.merge_from(patch);
        assert_eq!(base.num_experiments, Some(10));
        assert_eq!(base.num_running_experiments, Some(2));
        assert_eq!(base.num_succeeded_experiments, Some(8));
    }
}
