//! Allocations: a task group of a job placed on a node.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, Job, Namespaced};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocDesiredStatus {
    Run,
    Stop,
    Evict,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocClientStatus {
    Pending,
    Running,
    Complete,
    Failed,
    Lost,
    Unknown,
}

/// An allocation.
///
/// `job` embeds the full job version the allocation was placed for; the store
/// shares it with the jobs table, so it is an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: String,
    pub namespace: String,
    pub eval_id: String,
    pub name: String,
    pub node_id: String,
    pub job_id: String,
    pub job: Option<Arc<Job>>,
    pub task_group: String,
    /// Empty when the allocation was not placed by a deployment.
    pub deployment_id: String,
    pub desired_status: AllocDesiredStatus,
    pub client_status: AllocClientStatus,
    pub create_time: DateTime<Utc>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for Allocation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Namespaced for Allocation {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}
