//! Batch assembly: one change set in, one ordered event batch out.

use statefeed_events::EventBatch;

use crate::change::{Change, ChangeSet};
use crate::classify::{Skip, classify};
use crate::registry;

/// Receives every change that produced no event.
///
/// Observers run inline with the commit; they must not block.
pub trait SkipObserver {
    fn skipped(&self, index: u64, change: &Change, skip: &Skip);
}

impl<O: SkipObserver + ?Sized> SkipObserver for &O {
    fn skipped(&self, index: u64, change: &Change, skip: &Skip) {
        (**self).skipped(index, change, skip)
    }
}

impl<A: SkipObserver, B: SkipObserver> SkipObserver for (A, B) {
    fn skipped(&self, index: u64, change: &Change, skip: &Skip) {
        self.0.skipped(index, change, skip);
        self.1.skipped(index, change, skip);
    }
}

/// Logs skips: routine ones at `debug`, the rest at `warn`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSkips;

impl SkipObserver for LogSkips {
    fn skipped(&self, index: u64, change: &Change, skip: &Skip) {
        if skip.is_routine() {
            tracing::debug!(index, table = %change.table, reason = skip.reason(), "change not published");
        } else {
            tracing::warn!(index, table = %change.table, reason = skip.reason(), error = %skip, "dropping change from event batch");
        }
    }
}

/// Translate a committed change set, logging skipped changes.
///
/// Returns `None` when the write kind is not published.
pub fn translate(change_set: &ChangeSet) -> Option<EventBatch> {
    translate_observed(change_set, &LogSkips)
}

/// Translate a committed change set, reporting skipped changes to `observer`.
///
/// Events come out in change order, each stamped with the change set's index
/// and the write kind's event type. Changes that cannot be classified are
/// omitted; the batch may be empty.
pub fn translate_observed<O>(change_set: &ChangeSet, observer: &O) -> Option<EventBatch>
where
    O: SkipObserver + ?Sized,
{
    let index = change_set.index;
    let Some(event_type) = registry::lookup(change_set.write_kind) else {
        tracing::trace!(index, write_kind = ?change_set.write_kind, "write kind not published");
        return None;
    };

    let events: Vec<_> = change_set
        .changes
        .iter()
        .filter_map(|change| match classify(change) {
            Ok(classified) => Some(classified.into_event(event_type, index)),
            Err(skip) => {
                observer.skipped(index, change, &skip);
                None
            }
        })
        .collect();

    tracing::trace!(
        index,
        event_type = %event_type,
        changes = change_set.changes.len(),
        events = events.len(),
        "assembled event batch"
    );

    Some(EventBatch::new(index, events))
}
