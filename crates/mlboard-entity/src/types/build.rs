//! Image build job records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::name::{EntityKind, UniqueName};
use crate::record::{overlay, overlay_extra, overlay_list, Record};

/// A docker image build job inside a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Primary key: `owner.project.builds.id`
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
    /// Compiled build definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,
    /// Raw build config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    /// Code-reference commit the image was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Dockerfile used for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_scheduled: Option<String>,
    /// Jobs that used this image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_jobs: Option<u64>,
    /// Experiments that used this image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_experiments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record for BuildRecord {
    const KIND: EntityKind = EntityKind::Build;

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
        overlay(&mut self.config, patch.config);
        overlay(&mut self.commit, patch.commit);
        overlay(&mut self.dockerfile, patch.dockerfile);
        overlay(&mut self.resources, patch.resources);
        overlay(&mut self.node_scheduled, patch.node_scheduled);
        overlay(&mut self.num_jobs, patch.num_jobs);
        overlay(&mut self.num_experiments, patch.num_experiments);
        overlay(&mut self.bookmarked, patch.bookmarked);
        overlay(&mut self.deleted, patch.deleted);
        overlay_extra(&mut self.extra, patch.extra);
    }
}
