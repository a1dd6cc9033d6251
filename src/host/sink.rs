//! Event sinks.

use parking_lot::Mutex;

use crate::domain::PoolEvent;
use crate::traits::EventSink;

/// Keeps every emitted event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PoolEvent>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.lock().clone()
    }

    /// Drains and returns the events received so far.
    pub fn take(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of events received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// `true` if no event was received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PoolEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Writes each event to the `tracing` pipeline at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PoolEvent) {
        tracing::info!(target: "pair_amm::events", event = event.name(), detail = ?event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Amount};

    fn swapped(n: u128) -> PoolEvent {
        PoolEvent::TokenSwapped {
            user: Address::from_low_u64(1),
            token_in: Address::from_low_u64(2),
            token_out: Address::from_low_u64(3),
            amount_in: Amount::new(n),
            amount_out: Amount::new(n / 2),
        }
    }

    #[test]
    fn records_in_order_and_drains() {
        let sink = RecordingSink::new();
        sink.emit(&swapped(10));
        sink.emit(&swapped(20));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events(), vec![swapped(10), swapped(20)]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn tracing_sink_accepts_events() {
        TracingSink.emit(&swapped(1));
    }
}
