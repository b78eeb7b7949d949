//! ACL objects: tokens, policies and auth methods. All are cluster-global.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclTokenType {
    Client,
    Management,
}

/// An ACL token.
///
/// `accessor_id` is the public handle; `secret_id` is the bearer credential and
/// must never leave the process inside an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclToken {
    pub accessor_id: String,
    pub secret_id: String,
    pub name: String,
    pub token_type: AclTokenType,
    pub policies: Vec<String>,
    pub global: bool,
    pub create_time: DateTime<Utc>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for AclToken {
    fn id(&self) -> &str {
        &self.accessor_id
    }
}

/// A named ACL policy (HCL rules kept verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclPolicy {
    pub name: String,
    pub description: String,
    pub rules: String,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for AclPolicy {
    fn id(&self) -> &str {
        &self.name
    }
}

/// An SSO auth method (e.g. OIDC) used to mint ACL tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMethod {
    pub name: String,
    pub method_type: String,
    pub token_locality: String,
    pub max_token_ttl_secs: u64,
    pub default: bool,
    pub create_time: DateTime<Utc>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Entity for AuthMethod {
    fn id(&self) -> &str {
        &self.name
    }
}
