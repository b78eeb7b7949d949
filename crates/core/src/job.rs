//! Job specifications.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, Namespaced};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Service,
    Batch,
    System,
    Sysbatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub driver: String,
    pub config: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub name: String,
    pub count: u32,
    pub tasks: Vec<Task>,
}

/// A registered job. Jobs can be large (every task group and task config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub job_type: JobType,
    pub priority: u8,
    pub datacenters: Vec<String>,
    pub task_groups: Vec<TaskGroup>,
    pub stop: bool,
    pub version: u64,
    pub submit_time: DateTime<Utc>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for Job {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Namespaced for Job {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}
