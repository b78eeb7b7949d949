//! `statefeed-state` — turns the row changes committed by one state-store write
//! into an ordered batch of topic-scoped events.
//!
//! ```text
//! ChangeSet ─▶ registry::lookup(write_kind)
//!           ─▶ classify(change) per change, in commit order (+ sanitize)
//!           ─▶ EventBatch ─▶ EventBus
//! ```
//!
//! Translation is a pure function of the change set: no locks, no IO, no
//! retained references. Anything it cannot classify is skipped, never surfaced
//! to the write path.

pub mod change;
pub mod classify;
pub mod metrics;
pub mod publisher;
pub mod registry;
pub mod sanitize;
pub mod translate;

pub use change::{Change, ChangeSet, Snapshot, Table};
pub use classify::{Classified, Skip, classify};
pub use metrics::{SkipCounters, SkipCounts};
pub use publisher::{ChangePublisher, PublishError, Published};
pub use registry::{WriteKind, lookup};
pub use translate::{LogSkips, SkipObserver, translate, translate_observed};

#[cfg(test)]
pub(crate) mod fixtures;
