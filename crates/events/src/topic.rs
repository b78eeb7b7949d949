use core::str::FromStr;

use serde::{Deserialize, Serialize};

use statefeed_core::DomainError;

/// Coarse subscription channel. One per entity kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "ACLToken")]
    AclToken,
    #[serde(rename = "ACLPolicy")]
    AclPolicy,
    #[serde(rename = "ACLAuthMethod")]
    AuthMethod,
    Evaluation,
    Allocation,
    Job,
    Node,
    Deployment,
    Service,
}

impl Topic {
    pub const ALL: [Topic; 9] = [
        Topic::AclToken,
        Topic::AclPolicy,
        Topic::AuthMethod,
        Topic::Evaluation,
        Topic::Allocation,
        Topic::Job,
        Topic::Node,
        Topic::Deployment,
        Topic::Service,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::AclToken => "ACLToken",
            Topic::AclPolicy => "ACLPolicy",
            Topic::AuthMethod => "ACLAuthMethod",
            Topic::Evaluation => "Evaluation",
            Topic::Allocation => "Allocation",
            Topic::Job => "Job",
            Topic::Node => "Node",
            Topic::Deployment => "Deployment",
            Topic::Service => "Service",
        }
    }
}

impl core::fmt::Display for Topic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::unknown("topic", s))
    }
}
