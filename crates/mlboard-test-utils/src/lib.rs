//! Testing utilities for the MLBoard workspace
//!
//! Shared record constructors and payload builders.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use mlboard_entity::{
    BuildRecord, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord, ProjectRecord,
    UniqueName,
};
use serde_json::{json, Value};

pub fn unique_name(s: &str) -> UniqueName {
    UniqueName::parse(s).unwrap()
}

pub fn project_record(name: &str) -> ProjectRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

pub fn experiment_record(name: &str) -> ExperimentRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

pub fn group_record(name: &str) -> GroupRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

pub fn job_record(name: &str) -> JobRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

pub fn build_record(name: &str) -> BuildRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

pub fn experiment_job_record(name: &str) -> ExperimentJobRecord {
    serde_json::from_value(json!({ "unique_name": name })).unwrap()
}

/// `{results, count}` list body around raw item payloads
pub fn list_body(results: Vec<Value>, count: u64) -> Value {
    json!({ "results": results, "count": count })
}

/// A realistic build payload as the detail endpoint returns it
pub fn build_payload(owner: &str, project: &str, id: i64) -> Value {
    json!({
        "id": id,
        "uuid": "0c2b1a4e-65d2-4a55-b7cd-2e1d3f8a9b10",
        "unique_name": format!("{owner}.{project}.builds.{id}"),
        "user": owner,
        "project": format!("{owner}.{project}"),
        "created_at": "2018-08-01T10:00:00Z",
        "updated_at": "2018-08-01T10:05:00Z",
        "last_status": "succeeded",
        "tags": ["latest"],
        "dockerfile": "FROM python:3.6",
    })
}

/// An experiment payload embedding one worker job
pub fn experiment_payload_with_job(owner: &str, project: &str, id: i64, job_id: i64) -> Value {
    json!({
        "id": id,
        "unique_name": format!("{owner}.{project}.{id}"),
        "user": owner,
        "project": format!("{owner}.{project}"),
        "last_status": "running",
        "jobs": [{
            "id": job_id,
            "unique_name": format!("{owner}.{project}.{id}.{job_id}"),
            "role": "master",
            "last_status": "running",
        }],
    })
}
