//! Native service registrations.

use serde::{Deserialize, Serialize};

use crate::{Entity, Namespaced};

/// One registered instance of a service, owned by an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRegistration {
    pub id: String,
    pub service_name: String,
    pub namespace: String,
    pub node_id: String,
    pub datacenter: String,
    pub job_id: String,
    pub alloc_id: String,
    pub tags: Vec<String>,
    pub address: String,
    pub port: u16,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for ServiceRegistration {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Namespaced for ServiceRegistration {
    fn namespace(&self) -> &str {
        &self.namespace
    }
}
