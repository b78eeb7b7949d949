//! Write kinds and the event type each one is published as.

use statefeed_events::EventType;

/// Logical reason a write transaction was committed.
///
/// Closed set of every write the store applies. Most internal bookkeeping writes
/// have no event type and stay invisible to subscribers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WriteKind {
    NodeRegister,
    NodeDeregister,
    NodeBatchDeregister,
    UpsertNodeEvents,
    NodeUpdateStatus,
    NodeUpdateEligibility,
    NodeUpdateDrain,
    BatchNodeUpdateDrain,
    EvalUpdate,
    EvalDelete,
    AllocClientUpdate,
    AllocUpdate,
    AllocUpdateDesiredTransition,
    JobRegister,
    JobDeregister,
    JobBatchDeregister,
    JobStability,
    DeploymentStatusUpdate,
    DeploymentPromote,
    DeploymentAllocHealth,
    DeploymentDelete,
    ApplyPlanResults,
    AclTokenUpsert,
    AclTokenDelete,
    AclTokenBootstrap,
    AclPolicyUpsert,
    AclPolicyDelete,
    AclAuthMethodUpsert,
    AclAuthMethodDelete,
    ServiceRegistrationUpsert,
    ServiceRegistrationDeleteById,
    ServiceRegistrationDeleteByNodeId,
    VaultAccessorRegister,
    SchedulerConfig,
    ClusterMetadata,
    NamespaceUpsert,
    NamespaceDelete,
    VariablesApply,
    RootKeyMetaUpsert,
    ScalingEventRegister,
    OneTimeTokenUpsert,
}

impl WriteKind {
    /// Event type this write is published as, if any.
    pub fn event_type(self) -> Option<EventType> {
        use WriteKind::*;

        let event_type = match self {
            NodeRegister => EventType::NodeRegistration,
            NodeDeregister => EventType::NodeDeregistration,
            UpsertNodeEvents | NodeUpdateStatus => EventType::NodeEvent,
            NodeUpdateEligibility | NodeUpdateDrain | BatchNodeUpdateDrain => EventType::NodeDrain,
            EvalUpdate => EventType::EvaluationUpdated,
            AllocClientUpdate | AllocUpdate => EventType::AllocationUpdated,
            AllocUpdateDesiredTransition => EventType::AllocationUpdateDesiredStatus,
            JobRegister => EventType::JobRegistered,
            JobDeregister => EventType::JobDeregistered,
            JobBatchDeregister => EventType::JobBatchDeregistered,
            DeploymentStatusUpdate => EventType::DeploymentStatusUpdate,
            DeploymentPromote => EventType::DeploymentPromotion,
            DeploymentAllocHealth => EventType::DeploymentAllocHealth,
            ApplyPlanResults => EventType::PlanResult,
            AclTokenUpsert => EventType::AclTokenUpserted,
            AclTokenDelete => EventType::AclTokenDeleted,
            AclPolicyUpsert => EventType::AclPolicyUpserted,
            AclPolicyDelete => EventType::AclPolicyDeleted,
            AclAuthMethodUpsert => EventType::AclAuthMethodUpserted,
            AclAuthMethodDelete => EventType::AclAuthMethodDeleted,
            ServiceRegistrationUpsert => EventType::ServiceRegistration,
            ServiceRegistrationDeleteById | ServiceRegistrationDeleteByNodeId => {
                EventType::ServiceDeregistration
            }
            NodeBatchDeregister | EvalDelete | JobStability | DeploymentDelete
            | AclTokenBootstrap | VaultAccessorRegister | SchedulerConfig | ClusterMetadata
            | NamespaceUpsert | NamespaceDelete | VariablesApply | RootKeyMetaUpsert
            | ScalingEventRegister | OneTimeTokenUpsert => return None,
        };
        Some(event_type)
    }
}

/// Resolve the event type for a write kind. `None` means the whole transaction
/// is unpublished, which is routine.
pub fn lookup(kind: WriteKind) -> Option<EventType> {
    kind.event_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_writes_share_event_types() {
        assert_eq!(lookup(WriteKind::NodeUpdateStatus), Some(EventType::NodeEvent));
        assert_eq!(lookup(WriteKind::UpsertNodeEvents), Some(EventType::NodeEvent));
        for kind in [
            WriteKind::NodeUpdateEligibility,
            WriteKind::NodeUpdateDrain,
            WriteKind::BatchNodeUpdateDrain,
        ] {
            assert_eq!(lookup(kind), Some(EventType::NodeDrain));
        }
    }

    #[test]
    fn both_service_delete_paths_are_deregistrations() {
        assert_eq!(
            lookup(WriteKind::ServiceRegistrationDeleteById),
            lookup(WriteKind::ServiceRegistrationDeleteByNodeId)
        );
        assert_eq!(
            lookup(WriteKind::ServiceRegistrationDeleteById),
            Some(EventType::ServiceDeregistration)
        );
    }

    #[test]
    fn internal_writes_are_unpublished() {
        for kind in [
            WriteKind::SchedulerConfig,
            WriteKind::ClusterMetadata,
            WriteKind::VariablesApply,
            WriteKind::EvalDelete,
        ] {
            assert_eq!(lookup(kind), None, "{kind:?}");
        }
    }

    #[test]
    fn plan_results_are_published() {
        assert_eq!(lookup(WriteKind::ApplyPlanResults), Some(EventType::PlanResult));
    }
}
