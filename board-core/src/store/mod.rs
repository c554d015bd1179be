//! The central state store.
//!
//! A single actor task owns the [`AppState`] and applies intents one at a time
//! in submission order. Everyone else talks to it through a [`StoreHandle`]:
//! intents go in over an mpsc queue, immutable snapshots come out over a watch
//! channel and change notifications over the [`EventBus`].

pub mod state;

pub use state::{AppState, TokenList};

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::event_bus::{EventBus, StoreEvent};
use crate::shutdown::Shutdown;
use board::Intent;
use log::{debug, info, trace, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `BulkLoad` after the board is already populated.
    #[error("board is already loaded")]
    AlreadyLoaded,
}

/// The store actor. Create with [`Store::new`], drive with [`Store::run`].
pub struct Store {
    state: Arc<AppState>,
    intents: mpsc::Receiver<Intent>,
    snapshots: watch::Sender<Arc<AppState>>,
    events: EventBus,
    applied: u64,
}

impl Store {
    /// Creates the actor and the handle used to reach it.
    pub fn new(config: &BoardConfig) -> (Self, StoreHandle) {
        let state = Arc::new(AppState::new());
        let (intent_tx, intent_rx) = mpsc::channel(config.intent_capacity.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());
        let events = EventBus::new(config.event_capacity);

        let store = Self {
            state,
            intents: intent_rx,
            snapshots: snapshot_tx,
            events: events.clone(),
            applied: 0,
        };
        let handle = StoreHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
            events,
        };
        (store, handle)
    }

    /// Applies intents until shutdown is requested or every handle is dropped.
    ///
    /// Shutdown wins over queued intents: nothing is applied once it was
    /// requested, even if intents are still waiting.
    pub async fn run(mut self, mut shutdown: Shutdown) {
        info!("Store: started");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => {
                    info!("Store: shutdown requested after {} applied intents", self.applied);
                    break;
                }
                intent = self.intents.recv() => match intent {
                    Some(intent) => self.handle(intent),
                    None => {
                        info!("Store: all handles dropped, stopping");
                        break;
                    }
                },
            }
        }
    }

    fn handle(&mut self, intent: Intent) {
        let kind = intent.kind();
        let mut next = AppState::clone(&self.state);

        match next.apply(intent) {
            Ok(Some(event)) => {
                self.state = Arc::new(next);
                self.snapshots.send_replace(self.state.clone());
                self.applied += 1;
                match &event {
                    StoreEvent::PriceChanged { .. } => trace!("Store: applied {:?}", event),
                    _ => debug!("Store: applied {:?}", event),
                }
                self.events.publish(event);
            }
            Ok(None) => trace!("Store: {} left state unchanged", kind),
            Err(e) => warn!("Store: rejected {}: {}", kind, e),
        }
    }
}

/// Narrow read/write access to the store.
///
/// Cloning is cheap; every producer (feed, bootstrap, user input) holds its own.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    intents: mpsc::Sender<Intent>,
    snapshots: watch::Receiver<Arc<AppState>>,
    events: EventBus,
}

impl StoreHandle {
    /// Enqueues an intent, waiting for queue space.
    pub async fn dispatch(&self, intent: Intent) -> Result<()> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| BoardError::StoreClosed)
    }

    /// Enqueues an intent without waiting.
    ///
    /// Returns `Ok(false)` when the queue is full and the intent was dropped.
    pub fn try_dispatch(&self, intent: Intent) -> Result<bool> {
        match self.intents.try_send(intent) {
            Ok(()) => Ok(true),
            Err(mpsc::error::TrySendError::Full(_)) => Ok(false),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(BoardError::StoreClosed),
        }
    }

    /// The latest fully applied state.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.snapshots.borrow().clone()
    }

    /// A receiver that wakes whenever a changed state is published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.snapshots.clone()
    }

    pub fn events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.intents.is_closed()
    }
}
