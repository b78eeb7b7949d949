//! Per-table classification of a single change into an event.

use std::sync::Arc;

use thiserror::Error;

use statefeed_core::{Entity, Namespaced};
use statefeed_events::{Event, EventType, Payload};

use crate::change::{Change, Snapshot, Table};
use crate::sanitize;

/// Why a change produced no event.
///
/// None of these fail the batch; the change is omitted and the rest of the
/// transaction is still published.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The table is not wired to any topic.
    #[error("table {0:?} is not published")]
    UnmappedTable(String),

    /// The table is published, but not in this direction (e.g. job deletes).
    #[error("{} on {table} is not published", direction(.deleted))]
    NotEmitted { table: Table, deleted: bool },

    /// The authoritative snapshot is not the variant the table stores.
    #[error("{table} change carried a {found} snapshot, expected {expected}")]
    SnapshotMismatch {
        table: Table,
        expected: &'static str,
        found: &'static str,
    },

    /// Malformed change: the snapshot selected by `deleted` is absent.
    #[error("{table} change has no {} snapshot", authoritative_side(.deleted))]
    MissingSnapshot { table: Table, deleted: bool },
}

fn direction(deleted: &bool) -> &'static str {
    if *deleted { "delete" } else { "upsert" }
}

fn authoritative_side(deleted: &bool) -> &'static str {
    if *deleted { "before" } else { "after" }
}

impl Skip {
    /// Expected omissions, as opposed to ones that point at a store/eventing bug.
    pub fn is_routine(&self) -> bool {
        matches!(self, Skip::UnmappedTable(_) | Skip::NotEmitted { .. })
    }

    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Skip::UnmappedTable(_) => "unmapped_table",
            Skip::NotEmitted { .. } => "not_emitted",
            Skip::SnapshotMismatch { .. } => "snapshot_mismatch",
            Skip::MissingSnapshot { .. } => "missing_snapshot",
        }
    }
}

/// A classified change, waiting for the transaction's event type and index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub key: String,
    pub namespace: Option<String>,
    pub filter_keys: Vec<String>,
    pub payload: Payload,
}

impl Classified {
    fn global(entity: &impl Entity, payload: Payload) -> Self {
        Self {
            key: entity.id().to_string(),
            namespace: None,
            filter_keys: Vec::new(),
            payload,
        }
    }

    fn namespaced(entity: &impl Namespaced, filter_keys: &[&str], payload: Payload) -> Self {
        Self {
            key: entity.id().to_string(),
            namespace: Some(entity.namespace().to_string()),
            filter_keys: filter_keys.iter().map(|k| (*k).to_string()).collect(),
            payload,
        }
    }

    pub fn into_event(self, event_type: EventType, index: u64) -> Event {
        Event::new(
            event_type,
            index,
            self.key,
            self.namespace,
            self.filter_keys,
            self.payload,
        )
    }
}

/// Classify one change.
///
/// Dispatch is on direction, then table. Key, namespace and filter keys are
/// derived the same way whichever snapshot (`before` for deletes, `after`
/// otherwise) is authoritative.
pub fn classify(change: &Change) -> Result<Classified, Skip> {
    let table: Table = change
        .table
        .parse()
        .map_err(|_| Skip::UnmappedTable(change.table.clone()))?;

    if change.deleted && !table.emits_on_delete() {
        return Err(Skip::NotEmitted {
            table,
            deleted: true,
        });
    }

    let snapshot = change.authoritative().ok_or(Skip::MissingSnapshot {
        table,
        deleted: change.deleted,
    })?;

    let classified = match (table, snapshot) {
        (Table::AclToken, Snapshot::AclToken(token)) => Classified::global(
            &**token,
            Payload::AclToken(sanitize::redact_acl_token(token)),
        ),
        (Table::AclPolicy, Snapshot::AclPolicy(policy)) => {
            Classified::global(&**policy, Payload::AclPolicy(Arc::clone(policy)))
        }
        (Table::AuthMethod, Snapshot::AuthMethod(method)) => {
            Classified::global(&**method, Payload::AuthMethod(Arc::clone(method)))
        }
        (Table::Evaluation, Snapshot::Evaluation(eval)) => Classified::namespaced(
            &**eval,
            &[eval.job_id.as_str(), eval.deployment_id.as_str()],
            Payload::Evaluation(Arc::clone(eval)),
        ),
        (Table::Allocation, Snapshot::Allocation(alloc)) => Classified::namespaced(
            &**alloc,
            &[alloc.job_id.as_str(), alloc.deployment_id.as_str()],
            Payload::Allocation(sanitize::shrink_allocation(alloc)),
        ),
        (Table::Job, Snapshot::Job(job)) => {
            Classified::namespaced(&**job, &[], Payload::Job(Arc::clone(job)))
        }
        (Table::Node, Snapshot::Node(node)) => {
            Classified::global(&**node, Payload::Node(sanitize::sanitize_node(node)))
        }
        (Table::Deployment, Snapshot::Deployment(deployment)) => Classified::namespaced(
            &**deployment,
            &[deployment.job_id.as_str()],
            Payload::Deployment(Arc::clone(deployment)),
        ),
        (Table::ServiceRegistration, Snapshot::ServiceRegistration(service)) => {
            Classified::namespaced(
                &**service,
                &[service.job_id.as_str(), service.service_name.as_str()],
                Payload::Service(Arc::clone(service)),
            )
        }
        (table, found) => {
            return Err(Skip::SnapshotMismatch {
                table,
                expected: table.snapshot_kind(),
                found: found.kind(),
            });
        }
    };

    Ok(classified)
}
