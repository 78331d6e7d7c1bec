//! Project records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, overlay_list, Record};

/// A user-owned project, the root of the ownership hierarchy
///
/// Relation lists accumulate the unique names of child entities seen so
/// far; list views do not read them (they read `last_fetched`), but detail
/// views and back-reference maintenance do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Primary key: `owner.project`
    pub unique_name: UniqueName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tensorboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_notebook: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_independent_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_experiment_groups: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_jobs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_builds: Option<u64>,
    /// Unique names of the project's experiments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiments: Vec<UniqueName>,
    /// Unique names of the project's experiment groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<UniqueName>,
    /// Unique names of the project's jobs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<UniqueName>,
    /// Unique names of the project's builds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub builds: Vec<UniqueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for ProjectRecord {
    const KIND: EntityKind = EntityKind::Project;

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
        overlay(&mut self.description, patch.description);
        overlay_list(&mut self.tags, patch.tags);
        overlay(&mut self.created_at, patch.created_at);
        overlay(&mut self.updated_at, patch.updated_at);
        overlay(&mut self.is_public, patch.is_public);
        overlay(&mut self.has_code, patch.has_code);
        overlay(&mut self.has_tensorboard, patch.has_tensorboard);
        overlay(&mut self.has_notebook, patch.has_notebook);
        overlay(&mut self.num_experiments, patch.num_experiments);
        overlay(
            &mut self.num_independent_experiments,
            patch.num_independent_experiments,
        );
        overlay(&mut self.num_experiment_groups, patch.num_experiment_groups);
        overlay(&mut self.num_jobs, patch.num_jobs);
        overlay(&mut self.num_builds, patch.num_builds);
        overlay_list(&mut self.experiments, patch.experiments);
        overlay_list(&mut self.groups, patch.groups);
        overlay_list(&mut self.jobs, patch.jobs);
        overlay_list(&mut self.builds, patch.builds);
        overlay(&mut self.bookmarked, patch.bookmarked);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relation_lists_hold_names_after_normalization() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "unique_name": "alice.proj1",
            "experiments": ["alice.proj1.4", "alice.proj1.9"],
            "builds": ["alice.proj1.builds.1"],
        }))
        .unwrap();

        assert_eq!(record.experiments.len(), 2);
        assert_eq!(record.builds[0].as_str(), "alice.proj1.builds.1");
    }
}
