//! Lifetime of a board.
//!
//! A [`Session`] owns the store actor, the bootstrap loader and the price
//! feed. Ending the session (explicitly with [`Session::shutdown`] or by
//! dropping it) cancels every background task, so nothing mutates the store
//! once the session is gone.

use crate::bootstrap::BootstrapLoader;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::feed::{FeedRunner, FeedStats, PriceFeed, RandomWalkFeed};
use crate::shutdown::{self, ShutdownTrigger};
use crate::store::{Store, StoreHandle};
use log::{error, info, warn};
use std::time::Duration;
use tokio::task::JoinHandle;

struct FeedTask {
    trigger: ShutdownTrigger,
    task: JoinHandle<FeedStats>,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Whether the bootstrap load was submitted before shutdown.
    pub loaded: bool,
    /// Stats of the feed that was running at shutdown, if any.
    pub feed: Option<FeedStats>,
}

pub struct Session {
    handle: StoreHandle,
    trigger: ShutdownTrigger,
    feed_period: Duration,
    store_task: Option<JoinHandle<()>>,
    bootstrap_task: Option<JoinHandle<Result<bool>>>,
    feed: Option<FeedTask>,
}

impl Session {
    /// Starts a session with the random-walk simulator as its price feed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: &BoardConfig) -> Result<Self> {
        Self::start_with_feed(config, RandomWalkFeed::from_config(config))
    }

    /// Starts a session driven by `feed`.
    pub fn start_with_feed<F>(config: &BoardConfig, feed: F) -> Result<Self>
    where
        F: PriceFeed + 'static,
    {
        config.validate()?;

        let (trigger, shutdown) = shutdown::channel();
        let (store, handle) = Store::new(config);
        let store_task = tokio::spawn(store.run(shutdown.clone()));

        let loader = BootstrapLoader::from_config(config);
        let bootstrap_task = tokio::spawn(loader.run(handle.clone(), shutdown));

        let mut session = Self {
            handle,
            trigger,
            feed_period: config.feed_period(),
            store_task: Some(store_task),
            bootstrap_task: Some(bootstrap_task),
            feed: None,
        };
        session.start_feed(feed);
        info!("Session: started");
        Ok(session)
    }

    /// Handle for user intents and reads.
    pub fn handle(&self) -> &StoreHandle {
        &self.handle
    }

    pub fn is_feed_running(&self) -> bool {
        self.feed.is_some()
    }

    /// Replaces the running feed (if any) with `feed`.
    pub fn start_feed<F>(&mut self, feed: F)
    where
        F: PriceFeed + 'static,
    {
        if let Some(old) = self.feed.take() {
            old.trigger.trigger();
        }
        let (trigger, shutdown) = shutdown::channel();
        let runner = FeedRunner::new(feed, self.feed_period);
        let task = tokio::spawn(runner.run(self.handle.clone(), shutdown));
        self.feed = Some(FeedTask { trigger, task });
    }

    /// Stops the running feed and returns its stats.
    pub async fn stop_feed(&mut self) -> Option<FeedStats> {
        let FeedTask { trigger, task } = self.feed.take()?;
        trigger.trigger();
        match task.await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!("Session: feed task failed: {}", e);
                None
            }
        }
    }

    /// Cancels every task and waits for them to finish.
    pub async fn shutdown(mut self) -> SessionReport {
        info!("Session: shutting down");
        self.trigger.trigger();

        let feed = self.stop_feed().await;

        let loaded = match self.bootstrap_task.take() {
            Some(task) => match task.await {
                Ok(Ok(loaded)) => loaded,
                Ok(Err(e)) => {
                    warn!("Session: bootstrap failed: {}", e);
                    false
                }
                Err(e) => {
                    error!("Session: bootstrap task failed: {}", e);
                    false
                }
            },
            None => false,
        };

        if let Some(task) = self.store_task.take() {
            if let Err(e) = task.await {
                error!("Session: store task failed: {}", e);
            }
        }

        SessionReport { loaded, feed }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.trigger.trigger();
        if let Some(feed) = self.feed.take() {
            feed.trigger.trigger();
            feed.task.abort();
        }
        if let Some(task) = self.bootstrap_task.take() {
            task.abort();
        }
        if let Some(task) = self.store_task.take() {
            task.abort();
        }
    }
}
