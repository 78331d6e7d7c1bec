//! Run status records
//!
//! Statuses are the one entity keyed by numeric id rather than unique
//! name: a status row belongs to exactly one run and has no ownership
//! path of its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single status transition reported for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Server-side numeric id, the primary key
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Status string (created, scheduled, running, succeeded, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured details reported alongside the transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Unrecognized payload fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_payload_deserializes() {
        let status: StatusRecord = serde_json::from_value(json!({
            "id": 12,
            "status": "running",
            "message": null,
        }))
        .unwrap();
        assert_eq!(status.id, 12);
        assert_eq!(status.status.as_deref(), Some("running"));
        assert!(status.message.is_none());
    }
}
