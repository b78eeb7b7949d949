use serde::Serialize;

use crate::{EventType, Payload, Topic};

/// One domain-level fact about a committed row.
///
/// Events are self-describing: the broker fans them out by `topic`, `key`,
/// `namespace` and `filter_keys` without looking at the payload. The topic is
/// derived from the payload, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    topic: Topic,
    #[serde(rename = "Type")]
    event_type: EventType,
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    filter_keys: Vec<String>,
    /// Raft index of the write that produced this event.
    index: u64,
    payload: Payload,
}

impl Event {
    pub fn new(
        event_type: EventType,
        index: u64,
        key: impl Into<String>,
        namespace: Option<String>,
        filter_keys: Vec<String>,
        payload: Payload,
    ) -> Self {
        Self {
            topic: payload.topic(),
            event_type,
            key: key.into(),
            namespace,
            filter_keys,
            index,
            payload,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `None` for cluster-global entities.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn filter_keys(&self) -> &[String] {
        &self.filter_keys
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Ordered events produced by one write transaction. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventBatch {
    index: u64,
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new(index: u64, events: Vec<Event>) -> Self {
        Self { index, events }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use statefeed_core::{AclPolicy, Deployment, DeploymentStatus};

    use super::*;
    use crate::AclTokenEvent;

    fn policy() -> Arc<AclPolicy> {
        Arc::new(AclPolicy {
            name: "readonly".to_string(),
            description: String::new(),
            rules: "namespace \"default\" { policy = \"read\" }".to_string(),
            create_index: 3,
            modify_index: 3,
        })
    }

    #[test]
    fn topic_follows_payload_variant() {
        let event = Event::new(
            EventType::AclPolicyUpserted,
            10,
            "readonly",
            None,
            Vec::new(),
            Payload::AclPolicy(policy()),
        );
        assert_eq!(event.topic(), Topic::AclPolicy);
        assert_eq!(event.payload().topic(), event.topic());
    }

    #[test]
    fn serialized_event_uses_wire_field_names() {
        let deployment = Arc::new(Deployment {
            id: "d1".to_string(),
            namespace: "prod".to_string(),
            job_id: "web".to_string(),
            job_version: 2,
            status: DeploymentStatus::Running,
            status_description: "Deployment is running".to_string(),
            create_index: 40,
            modify_index: 41,
        });
        let event = Event::new(
            EventType::DeploymentStatusUpdate,
            41,
            "d1",
            Some("prod".to_string()),
            vec!["web".to_string()],
            Payload::Deployment(deployment),
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["Topic"], "Deployment");
        assert_eq!(json["Type"], "DeploymentStatusUpdate");
        assert_eq!(json["Key"], "d1");
        assert_eq!(json["Namespace"], "prod");
        assert_eq!(json["FilterKeys"], serde_json::json!(["web"]));
        assert_eq!(json["Index"], 41);
        assert_eq!(json["Payload"]["Deployment"]["job_id"], "web");
    }

    #[test]
    fn global_event_omits_namespace() {
        let event = Event::new(
            EventType::AclPolicyDeleted,
            5,
            "readonly",
            None,
            Vec::new(),
            Payload::AclPolicy(policy()),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("Namespace").is_none());
    }

    #[test]
    fn acl_token_payload_never_serializes_the_secret() {
        let token = Arc::new(statefeed_core::AclToken {
            accessor_id: "acc-1".to_string(),
            secret_id: String::new(),
            name: "ci".to_string(),
            token_type: statefeed_core::AclTokenType::Client,
            policies: vec!["readonly".to_string()],
            global: false,
            create_time: Utc::now(),
            expiration_time: None,
            create_index: 1,
            modify_index: 1,
        });
        let payload = Payload::AclToken(AclTokenEvent::new(token, "top-secret"));

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("top-secret"));
        match &payload {
            Payload::AclToken(ev) => assert_eq!(ev.secret_id(), "top-secret"),
            other => panic!("unexpected payload {other:?}"),
        }
    }
}
