//! Price feeds.
//!
//! This module defines the contract every price source implements and the
//! runner that turns a source into a stream of `UpdatePrice` intents. The
//! built-in [`RandomWalkFeed`] stands in for a live push transport; a real
//! transport decodes its messages with [`decode_price_update`] and delivers
//! them through the same store handle, at any time and any rate.

pub mod random_walk;
pub mod runner;

pub use random_walk::RandomWalkFeed;
pub use runner::{FeedRunner, FeedStats};

use crate::error::{BoardError, Result};
use crate::store::AppState;
use board::{Intent, PriceUpdate};

/// A component that produces price updates.
///
/// # Examples
///
/// ```
/// use board::PriceUpdate;
/// use board_core::feed::PriceFeed;
/// use board_core::AppState;
///
/// struct Silent;
///
/// impl PriceFeed for Silent {
///     fn next_update(&mut self, _state: &AppState) -> Option<PriceUpdate> {
///         None
///     }
/// }
/// ```
pub trait PriceFeed: Send {
    /// Produces the update for one feed tick, given the latest board snapshot.
    ///
    /// Returns `None` when there is nothing to report this tick. Only called
    /// once the board is ready.
    fn next_update(&mut self, state: &AppState) -> Option<PriceUpdate>;
}

/// Decodes one inbound feed message.
///
/// Accepts the tagged intent format (`{"type":"UpdatePrice","payload":{...}}`)
/// and refuses every other intent kind: a feed may only move prices.
pub fn decode_price_update(bytes: &[u8]) -> Result<PriceUpdate> {
    match serde_json::from_slice::<Intent>(bytes)? {
        Intent::UpdatePrice(update) => Ok(update),
        other => Err(BoardError::UnexpectedIntent(other.kind())),
    }
}
