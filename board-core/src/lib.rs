//! # Board Core Library
//!
//! The state/update core of the token board.
//!
//! ## Modules
//! - `store`: `AppState`, its reducer and the single-writer store actor.
//! - `event_bus`: Change notifications fanned out to observers.
//! - `view`: Filtered and sorted per-bucket columns, memoized per bucket.
//! - `selection`: Resolution of the token under inspection.
//! - `feed`: The price feed seam and the random-walk simulator.
//! - `bootstrap`: One-time population of the store.
//! - `session`: Lifetime of the store and its background tasks.
//! - `config`: Runtime configuration.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod event_bus;
pub mod feed;
pub mod selection;
pub mod session;
pub mod shutdown;
pub mod store;
pub mod view;

pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use event_bus::{EventBus, StoreEvent};
pub use session::Session;
pub use store::{AppState, StoreHandle};
pub use view::{ReadModel, ViewEngine};
