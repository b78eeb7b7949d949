//! Deployments track the rollout of one job version.

use serde::{Deserialize, Serialize};

use crate::{Entity, Namespaced};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Running,
    Paused,
    Failed,
    Successful,
    Cancelled,
    Pending,
    Blocked,
    Unblocking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub namespace: String,
    pub job_id: String,
    pub job_version: u64,
    pub status: DeploymentStatus,
    pub status_description: String,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for Deployment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Namespaced for Deployment {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}
