use serde::Serialize;

/// Human-readable tag naming why an event's transaction was committed.
///
/// Every event in a batch carries the same tag: it describes the write, not the
/// individual row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    NodeRegistration,
    NodeDeregistration,
    NodeEvent,
    NodeDrain,
    EvaluationUpdated,
    AllocationUpdated,
    AllocationUpdateDesiredStatus,
    JobRegistered,
    JobDeregistered,
    JobBatchDeregistered,
    DeploymentStatusUpdate,
    DeploymentPromotion,
    DeploymentAllocHealth,
    PlanResult,
    #[serde(rename = "ACLTokenDeleted")]
    AclTokenDeleted,
    #[serde(rename = "ACLTokenUpserted")]
    AclTokenUpserted,
    #[serde(rename = "ACLPolicyDeleted")]
    AclPolicyDeleted,
    #[serde(rename = "ACLPolicyUpserted")]
    AclPolicyUpserted,
    #[serde(rename = "ACLAuthMethodUpserted")]
    AclAuthMethodUpserted,
    #[serde(rename = "ACLAuthMethodDeleted")]
    AclAuthMethodDeleted,
    ServiceRegistration,
    ServiceDeregistration,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::NodeRegistration => "NodeRegistration",
            EventType::NodeDeregistration => "NodeDeregistration",
            EventType::NodeEvent => "NodeEvent",
            EventType::NodeDrain => "NodeDrain",
            EventType::EvaluationUpdated => "EvaluationUpdated",
            EventType::AllocationUpdated => "AllocationUpdated",
            EventType::AllocationUpdateDesiredStatus => "AllocationUpdateDesiredStatus",
            EventType::JobRegistered => "JobRegistered",
            EventType::JobDeregistered => "JobDeregistered",
            EventType::JobBatchDeregistered => "JobBatchDeregistered",
            EventType::DeploymentStatusUpdate => "DeploymentStatusUpdate",
            EventType::DeploymentPromotion => "DeploymentPromotion",
            EventType::DeploymentAllocHealth => "DeploymentAllocHealth",
            EventType::PlanResult => "PlanResult",
            EventType::AclTokenDeleted => "ACLTokenDeleted",
            EventType::AclTokenUpserted => "ACLTokenUpserted",
            EventType::AclPolicyDeleted => "ACLPolicyDeleted",
            EventType::AclPolicyUpserted => "ACLPolicyUpserted",
            EventType::AclAuthMethodUpserted => "ACLAuthMethodUpserted",
            EventType::AclAuthMethodDeleted => "ACLAuthMethodDeleted",
            EventType::ServiceRegistration => "ServiceRegistration",
            EventType::ServiceDeregistration => "ServiceDeregistration",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_display() {
        for ty in [
            EventType::AclTokenUpserted,
            EventType::PlanResult,
            EventType::ServiceDeregistration,
        ] {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{ty}\""));
        }
    }
}
