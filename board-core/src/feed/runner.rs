use super::PriceFeed;
use crate::shutdown::Shutdown;
use crate::store::StoreHandle;
use board::Intent;
use log::{debug, info, trace, warn};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

/// Counters reported when a feed runner stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub ticks: u64,
    pub dispatched: u64,
    /// Updates dropped because the intent queue was full.
    pub dropped: u64,
}

/// Drives a [`PriceFeed`] on a fixed period.
///
/// The runner owns nothing but its timer and the source; all state lives in
/// the store. It can be stopped and a new one started at any time.
pub struct FeedRunner<F: PriceFeed> {
    feed: F,
    period: Duration,
    stats: FeedStats,
}

impl<F: PriceFeed> FeedRunner<F> {
    pub fn new(feed: F, period: Duration) -> Self {
        Self {
            feed,
            period,
            stats: FeedStats::default(),
        }
    }

    /// Ticks until shutdown is requested or the store goes away.
    pub async fn run(mut self, handle: StoreHandle, mut shutdown: Shutdown) -> FeedStats {
        info!("Feed: started, period {:?}", self.period);

        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; updates start one period in.
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => {
                    info!("Feed: stopped ({:?})", self.stats);
                    break;
                }
                _ = ticker.tick() => {
                    if !self.tick(&handle) {
                        warn!("Feed: store closed, stopping ({:?})", self.stats);
                        break;
                    }
                }
            }
        }
        self.stats
    }

    /// One feed tick. Returns `false` once the store is gone.
    fn tick(&mut self, handle: &StoreHandle) -> bool {
        self.stats.ticks += 1;

        let state = handle.snapshot();
        if !state.is_ready() {
            trace!("Feed: board not ready, skipping tick");
            return true;
        }

        let Some(update) = self.feed.next_update(&state) else {
            return true;
        };

        match handle.try_dispatch(Intent::UpdatePrice(update)) {
            Ok(true) => {
                self.stats.dispatched += 1;
                true
            }
            Ok(false) => {
                self.stats.dropped += 1;
                debug!("Feed: intent queue full, dropped update");
                true
            }
            Err(_) => false,
        }
    }
}
