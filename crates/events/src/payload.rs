//! Event payloads: one variant per topic, already sanitized.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use statefeed_core::{
    AclPolicy, AclToken, Allocation, AuthMethod, Deployment, Evaluation, Job, Node,
    ServiceRegistration,
};

use crate::Topic;

/// Payload of an ACL token event.
///
/// Holds a redacted copy of the token. The original secret is kept alongside so
/// the broker can close subscriptions authenticated with a deleted or rotated
/// token; it is never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclTokenEvent {
    token: Arc<AclToken>,
    secret_id: String,
}

impl AclTokenEvent {
    /// `token` must already have its secret cleared.
    pub fn new(token: Arc<AclToken>, secret_id: impl Into<String>) -> Self {
        Self {
            token,
            secret_id: secret_id.into(),
        }
    }

    pub fn token(&self) -> &AclToken {
        &self.token
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }
}

impl Serialize for AclTokenEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.token.serialize(serializer)
    }
}

/// Tagged union of event payloads. The variant always matches the event's topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Payload {
    #[serde(rename = "ACLToken")]
    AclToken(AclTokenEvent),
    #[serde(rename = "ACLPolicy")]
    AclPolicy(Arc<AclPolicy>),
    #[serde(rename = "ACLAuthMethod")]
    AuthMethod(Arc<AuthMethod>),
    Evaluation(Arc<Evaluation>),
    Allocation(Arc<Allocation>),
    Job(Arc<Job>),
    Node(Arc<Node>),
    Deployment(Arc<Deployment>),
    Service(Arc<ServiceRegistration>),
}

impl Payload {
    pub fn topic(&self) -> Topic {
        match self {
            Payload::AclToken(_) => Topic::AclToken,
            Payload::AclPolicy(_) => Topic::AclPolicy,
            Payload::AuthMethod(_) => Topic::AuthMethod,
            Payload::Evaluation(_) => Topic::Evaluation,
            Payload::Allocation(_) => Topic::Allocation,
            Payload::Job(_) => Topic::Job,
            Payload::Node(_) => Topic::Node,
            Payload::Deployment(_) => Topic::Deployment,
            Payload::Service(_) => Topic::Service,
        }
    }
}
