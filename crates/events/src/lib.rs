//! `statefeed-events` — the event model published for state-store changes,
//! plus the bus abstraction batches are handed to.

pub mod bus;
pub mod event;
pub mod event_type;
pub mod in_memory_bus;
pub mod payload;
pub mod topic;

pub use bus::{EventBus, Subscription};
pub use event::{Event, EventBatch};
pub use event_type::EventType;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use payload::{AclTokenEvent, Payload};
pub use topic::Topic;
