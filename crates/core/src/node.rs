//! Client nodes registered with the cluster.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Initializing,
    Ready,
    Down,
    Disconnected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingEligibility {
    Eligible,
    Ineligible,
}

/// A lifecycle event recorded against a node (heartbeat misses, drain progress, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEvent {
    pub message: String,
    pub subsystem: String,
    pub details: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

/// A client node.
///
/// `secret_id` authenticates the node's client agent to the servers; it is a
/// credential, not an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub secret_id: String,
    pub name: String,
    pub datacenter: String,
    pub node_class: String,
    pub node_pool: String,
    pub http_addr: String,
    pub status: NodeStatus,
    pub scheduling_eligibility: SchedulingEligibility,
    pub drain: bool,
    pub attributes: BTreeMap<String, String>,
    pub meta: BTreeMap<String, String>,
    pub events: Vec<NodeEvent>,
    pub status_updated_at: DateTime<Utc>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for Node {
    fn id(&self) -> &str {
        &self.id
    }
}
