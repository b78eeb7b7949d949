//! Payload redaction.
//!
//! Every function here works on a copy; the store's snapshot is shared behind
//! `Arc` and is never touched. When there is nothing to strip the original
//! `Arc` is reused.

use std::sync::Arc;

use statefeed_core::{AclToken, Allocation, Node};
use statefeed_events::AclTokenEvent;

/// Node copy without its client secret.
pub fn sanitize_node(node: &Arc<Node>) -> Arc<Node> {
    if node.secret_id.is_empty() {
        return Arc::clone(node);
    }

    let mut clean = Node::clone(node);
    clean.secret_id.clear();
    Arc::new(clean)
}

/// Allocation copy without the embedded job.
///
/// The job is published on its own topic; embedding it would make every
/// allocation event as large as the job spec.
pub fn shrink_allocation(alloc: &Arc<Allocation>) -> Arc<Allocation> {
    if alloc.job.is_none() {
        return Arc::clone(alloc);
    }

    let mut shrunk = Allocation::clone(alloc);
    shrunk.job = None;
    Arc::new(shrunk)
}

/// Token payload with the secret cleared from the serialized token.
pub fn redact_acl_token(token: &Arc<AclToken>) -> AclTokenEvent {
    if token.secret_id.is_empty() {
        return AclTokenEvent::new(Arc::clone(token), String::new());
    }

    let mut redacted = AclToken::clone(token);
    let secret_id = std::mem::take(&mut redacted.secret_id);
    AclTokenEvent::new(Arc::new(redacted), secret_id)
}
