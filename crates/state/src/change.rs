//! Change records handed over by the state store after a commit.

use core::str::FromStr;
use std::sync::Arc;

use statefeed_core::{
    AclPolicy, AclToken, Allocation, AuthMethod, Deployment, DomainError, Evaluation, Job, Node,
    ServiceRegistration,
};

use crate::registry::WriteKind;

/// State-store tables the event layer knows how to classify.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Table {
    AclToken,
    AclPolicy,
    AuthMethod,
    Evaluation,
    Allocation,
    Job,
    Node,
    Deployment,
    ServiceRegistration,
}

impl Table {
    pub const ALL: [Table; 9] = [
        Table::AclToken,
        Table::AclPolicy,
        Table::AuthMethod,
        Table::Evaluation,
        Table::Allocation,
        Table::Job,
        Table::Node,
        Table::Deployment,
        Table::ServiceRegistration,
    ];

    /// Table name as registered in the store schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Table::AclToken => "acl_token",
            Table::AclPolicy => "acl_policy",
            Table::AuthMethod => "auth_method",
            Table::Evaluation => "evals",
            Table::Allocation => "allocs",
            Table::Job => "jobs",
            Table::Node => "nodes",
            Table::Deployment => "deployment",
            Table::ServiceRegistration => "service_registrations",
        }
    }

    /// Whether removing a row from this table is published.
    ///
    /// Rows of the other tables only produce events when inserted or updated.
    pub fn emits_on_delete(self) -> bool {
        matches!(
            self,
            Table::AclToken | Table::AclPolicy | Table::Node | Table::ServiceRegistration
        )
    }

    /// Snapshot variant stored in this table.
    pub fn snapshot_kind(self) -> &'static str {
        match self {
            Table::AclToken => "acl token",
            Table::AclPolicy => "acl policy",
            Table::AuthMethod => "auth method",
            Table::Evaluation => "evaluation",
            Table::Allocation => "allocation",
            Table::Job => "job",
            Table::Node => "node",
            Table::Deployment => "deployment",
            Table::ServiceRegistration => "service registration",
        }
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::unknown("table", s))
    }
}

/// Immutable row snapshot, shared with the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    AclToken(Arc<AclToken>),
    AclPolicy(Arc<AclPolicy>),
    AuthMethod(Arc<AuthMethod>),
    Evaluation(Arc<Evaluation>),
    Allocation(Arc<Allocation>),
    Job(Arc<Job>),
    Node(Arc<Node>),
    Deployment(Arc<Deployment>),
    ServiceRegistration(Arc<ServiceRegistration>),
}

impl Snapshot {
    pub fn kind(&self) -> &'static str {
        match self {
            Snapshot::AclToken(_) => Table::AclToken.snapshot_kind(),
            Snapshot::AclPolicy(_) => Table::AclPolicy.snapshot_kind(),
            Snapshot::AuthMethod(_) => Table::AuthMethod.snapshot_kind(),
            Snapshot::Evaluation(_) => Table::Evaluation.snapshot_kind(),
            Snapshot::Allocation(_) => Table::Allocation.snapshot_kind(),
            Snapshot::Job(_) => Table::Job.snapshot_kind(),
            Snapshot::Node(_) => Table::Node.snapshot_kind(),
            Snapshot::Deployment(_) => Table::Deployment.snapshot_kind(),
            Snapshot::ServiceRegistration(_) => Table::ServiceRegistration.snapshot_kind(),
        }
    }
}

macro_rules! impl_snapshot_from {
    ($variant:ident, $t:ty) => {
        impl From<Arc<$t>> for Snapshot {
            fn from(value: Arc<$t>) -> Self {
                Snapshot::$variant(value)
            }
        }

        impl From<$t> for Snapshot {
            fn from(value: $t) -> Self {
                Snapshot::$variant(Arc::new(value))
            }
        }
    };
}

impl_snapshot_from!(AclToken, AclToken);
impl_snapshot_from!(AclPolicy, AclPolicy);
impl_snapshot_from!(AuthMethod, AuthMethod);
impl_snapshot_from!(Evaluation, Evaluation);
impl_snapshot_from!(Allocation, Allocation);
impl_snapshot_from!(Job, Job);
impl_snapshot_from!(Node, Node);
impl_snapshot_from!(Deployment, Deployment);
impl_snapshot_from!(ServiceRegistration, ServiceRegistration);

/// One row mutation.
///
/// `deleted` selects the authoritative snapshot: `before` for removals, `after`
/// otherwise. The other side may be absent or stale and is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Raw table name; tables unknown to the event layer still flow through.
    pub table: String,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
    pub deleted: bool,
}

impl Change {
    pub fn insert(table: impl Into<String>, after: impl Into<Snapshot>) -> Self {
        Self {
            table: table.into(),
            before: None,
            after: Some(after.into()),
            deleted: false,
        }
    }

    pub fn update(
        table: impl Into<String>,
        before: impl Into<Snapshot>,
        after: impl Into<Snapshot>,
    ) -> Self {
        Self {
            table: table.into(),
            before: Some(before.into()),
            after: Some(after.into()),
            deleted: false,
        }
    }

    pub fn delete(table: impl Into<String>, before: impl Into<Snapshot>) -> Self {
        Self {
            table: table.into(),
            before: Some(before.into()),
            after: None,
            deleted: true,
        }
    }

    /// The snapshot that describes this change, per `deleted`.
    pub fn authoritative(&self) -> Option<&Snapshot> {
        if self.deleted {
            self.before.as_ref()
        } else {
            self.after.as_ref()
        }
    }
}

/// Every row change committed by one write transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Commit index; also the resume cursor for subscribers.
    pub index: u64,
    pub write_kind: WriteKind,
    /// Mutation order within the transaction.
    pub changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new(index: u64, write_kind: WriteKind, changes: Vec<Change>) -> Self {
        Self {
            index,
            write_kind,
            changes,
        }
    }
}
