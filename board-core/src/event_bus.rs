//! # Event Bus
//!
//! Fan-out of store changes to observers (presentation, loggers, tests).
//!
//! Every applied intent that changed state produces exactly one [`StoreEvent`].
//! Intents that changed nothing produce none, so observers never wake up for
//! a no-op price tick.

use board::{SortKey, TokenId, TokenStatus};
use tokio::sync::broadcast;

/// One observable state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// **Bootstrap**: the buckets were populated and the board is ready.
    Loaded { counts: [usize; 3] },

    /// **Feed**: one token changed price.
    PriceChanged {
        bucket: TokenStatus,
        id: TokenId,
        previous: f64,
        current: f64,
    },

    /// **User**: the token under inspection changed.
    SelectionChanged { id: Option<TokenId> },

    /// **User**: the active ordering changed.
    SortKeyChanged(SortKey),

    /// **User**: the filter text changed.
    FilterTextChanged(String),
}

impl StoreEvent {
    /// Whether this change alters the inputs of the derived view for `bucket`.
    pub fn touches(&self, bucket: TokenStatus) -> bool {
        match self {
            StoreEvent::Loaded { .. } => true,
            StoreEvent::PriceChanged { bucket: b, .. } => *b == bucket,
            StoreEvent::SelectionChanged { .. } => false,
            StoreEvent::SortKeyChanged(_) | StoreEvent::FilterTextChanged(_) => true,
        }
    }
}

/// A wrapper around a tokio broadcast channel, typed to [`StoreEvent`].
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Creates a new EventBus.
    ///
    /// A receiver that falls more than `capacity` events behind skips the
    /// oldest ones (`RecvError::Lagged`). The authoritative state is always
    /// available from the store snapshot, so lagging only loses notifications.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    pub fn publish(&self, event: StoreEvent) {
        // No subscribers is fine (e.g. headless runs).
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}
