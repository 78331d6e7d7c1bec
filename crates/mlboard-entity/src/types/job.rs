//! Standalone job records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, overlay_list, Record};

/// A standalone job run inside a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Primary key: `owner.project.jobs.id`
    pub unique_name: UniqueName,
    /// Server-side numeric id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Server-side uuid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Owning project's unique name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User tags
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
    /// Most recent status string reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,
    /// Compiled run definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,
    /// Requested resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    /// Node the job was scheduled on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_scheduled: Option<String>,
    /// Bookmark flag for the signed-in user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    /// Soft-delete flag; deleted records stay in the table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for JobRecord {
    const KIND: EntityKind = EntityKind::Job;

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
        overlay(&mut self.created_at, patch.created_at);
        overlay(&mut self.updated_at, patch.updated_at);
        overlay(&mut self.started_at, patch.started_at);
        overlay(&mut self.finished_at, patch.finished_at);
        overlay(&mut self.last_status, patch.last_status);
        overlay(&mut self.definition, patch.definition);
        overlay(&mut self.resources, patch.resources);
        overlay(&mut self.node_scheduled, patch.node_scheduled);
        overlay(&mut self.bookmarked, patch.bookmarked);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(name: &str) -> JobRecord {
        serde_json::from_value(json!({ "unique_name": name })).unwrap()
    }

    #[test]
    fn merge_preserves_unprovided_fields() {
        let mut base = job("alice.proj1.jobs.3");
        base.tags = vec!["a".to_string()];

        let mut patch = job("alice.proj1.jobs.3");
        patch.description = Some("x".to_string());

        base.merge_from(patch);
        assert_eq!(base.tags, vec!["a".to_string()]);
        assert_eq!(base.description.as_deref(), Some("x"));
    }

    #[test]
    fn unknown_payload_fields_survive() {
        let record: JobRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1.jobs.3",
            "ttl": 3600,
        }))
        .unwrap();
        assert_eq!(record.extra.get("ttl"), Some(&json!(3600)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back.get("ttl"), Some(&json!(3600)));
    }

    #[test]
    fn deleted_flag_defaults_to_live() {
        let mut record = job("alice.proj1.jobs.3");
        assert!(!record.deleted());
        record.set_deleted(true);
        assert!(record.deleted());
    }
}
