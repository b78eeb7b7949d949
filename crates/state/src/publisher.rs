//! Commit hook: translate a change set and hand the batch to the event bus.

use thiserror::Error;

use statefeed_events::{EventBatch, EventBus};

use crate::change::ChangeSet;
use crate::metrics::{SkipCounters, SkipCounts};
use crate::translate::{LogSkips, translate_observed};

/// Outcome of publishing one change set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Published {
    /// The write kind is not published.
    Unmapped,
    /// Nothing in the transaction classified; the bus was not called.
    Empty { index: u64 },
    /// A batch was handed to the bus.
    Batch { index: u64, events: usize },
}

#[derive(Debug, Error)]
pub enum PublishError<E: core::fmt::Debug> {
    /// The bus rejected a batch. Translation already succeeded; the store's
    /// commit stands and subscribers will see a gap at `index`.
    #[error("event bus rejected batch at index {index}: {error:?}")]
    Bus { index: u64, error: E },
}

/// Translates committed change sets and publishes the resulting batches.
///
/// Holds no state besides the bus and skip counters, so one publisher can serve
/// every commit; concurrent calls only contend inside the bus.
#[derive(Debug)]
pub struct ChangePublisher<B> {
    bus: B,
    skips: SkipCounters,
}

impl<B> ChangePublisher<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            skips: SkipCounters::new(),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn skip_counts(&self) -> SkipCounts {
        self.skips.snapshot()
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

impl<B> ChangePublisher<B>
where
    B: EventBus<EventBatch>,
{
    /// Translate `change_set` and publish the batch, if there is anything to say.
    pub fn publish(&self, change_set: &ChangeSet) -> Result<Published, PublishError<B::Error>> {
        let Some(batch) = translate_observed(change_set, &(LogSkips, &self.skips)) else {
            return Ok(Published::Unmapped);
        };

        let index = batch.index();
        if batch.is_empty() {
            tracing::debug!(index, "no events for committed change set");
            return Ok(Published::Empty { index });
        }

        let events = batch.len();
        self.bus.publish(batch).map_err(|error| {
            tracing::error!(index, events, error = ?error, "failed to publish event batch");
            PublishError::Bus { index, error }
        })?;

        tracing::debug!(index, events, "published event batch");
        Ok(Published::Batch { index, events })
    }
}

#[cfg(test)]
mod tests {
    use statefeed_events::Subscription;

    use super::*;
    use crate::change::Change;
    use crate::fixtures;
    use crate::registry::WriteKind;

    /// Bus that rejects everything.
    struct ClosedBus;

    impl EventBus<EventBatch> for ClosedBus {
        type Error = &'static str;

        fn publish(&self, _message: EventBatch) -> Result<(), Self::Error> {
            Err("closed")
        }

        fn subscribe(&self) -> Subscription<EventBatch> {
            let (_tx, rx) = std::sync::mpsc::channel();
            Subscription::new(rx)
        }
    }

    #[test]
    fn bus_failure_is_reported_with_index() {
        let publisher = ChangePublisher::new(ClosedBus);
        let change_set = ChangeSet::new(
            21,
            WriteKind::NodeRegister,
            vec![Change::insert("nodes", fixtures::node("n1"))],
        );

        let err = publisher.publish(&change_set).unwrap_err();
        match err {
            PublishError::Bus { index, error } => {
                assert_eq!(index, 21);
                assert_eq!(error, "closed");
            }
        }
    }

    #[test]
    fn unmapped_and_empty_change_sets_never_reach_the_bus() {
        let publisher = ChangePublisher::new(ClosedBus);

        let unmapped = ChangeSet::new(
            1,
            WriteKind::NamespaceUpsert,
            vec![Change::insert("nodes", fixtures::node("n1"))],
        );
        assert_eq!(publisher.publish(&unmapped).unwrap(), Published::Unmapped);

        let empty = ChangeSet::new(
            2,
            WriteKind::JobDeregister,
            vec![Change::delete("jobs", fixtures::job("web", "default"))],
        );
        assert_eq!(publisher.publish(&empty).unwrap(), Published::Empty { index: 2 });
        assert_eq!(publisher.skip_counts().not_emitted, 1);
    }
}
