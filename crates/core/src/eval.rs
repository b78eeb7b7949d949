//! Scheduler evaluations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, JobType, Namespaced};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalStatus {
    Blocked,
    Pending,
    Complete,
    Failed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub namespace: String,
    pub priority: u8,
    pub eval_type: JobType,
    pub triggered_by: String,
    pub job_id: String,
    /// Empty unless the evaluation was created for a deployment.
    pub deployment_id: String,
    pub node_id: String,
    pub status: EvalStatus,
    pub status_description: String,
    pub create_time: DateTime<Utc>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for Evaluation {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Namespaced for Evaluation {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}
