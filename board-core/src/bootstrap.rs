//! One-time population of the store.
//!
//! The loader waits for the configured startup delay, generates a working set
//! and submits a single `BulkLoad`. `run` consumes the loader, so a loader can
//! load at most once. If shutdown is requested during the delay, nothing is
//! submitted.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::shutdown::Shutdown;
use crate::store::StoreHandle;
use board::model::generator::generate_bucket;
use board::{Intent, TokenStatus, WorkingSet};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

pub struct BootstrapLoader {
    delay: Duration,
    per_bucket: usize,
    rng: StdRng,
}

impl BootstrapLoader {
    pub fn new(delay: Duration, per_bucket: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            delay,
            per_bucket,
            rng,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.bootstrap_delay(), config.tokens_per_bucket, config.seed)
    }

    /// Generates `per_bucket` tokens for each bucket.
    pub fn working_set(&mut self) -> Result<WorkingSet> {
        let [new, stretch, migrated] =
            TokenStatus::ALL.map(|status| generate_bucket(&mut self.rng, status, self.per_bucket));
        Ok(WorkingSet::new(new, stretch, migrated)?)
    }

    /// Waits out the delay, then loads. Returns whether a load was submitted.
    pub async fn run(mut self, handle: StoreHandle, mut shutdown: Shutdown) -> Result<bool> {
        info!("Bootstrap: loading in {:?}", self.delay);

        tokio::select! {
            biased;
            _ = shutdown.wait() => {
                info!("Bootstrap: cancelled before load");
                return Ok(false);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        let working_set = self.working_set()?;
        let total = working_set.len();
        handle.dispatch(Intent::BulkLoad(working_set)).await?;
        info!("Bootstrap: submitted {} tokens", total);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_set_shape() {
        let mut loader = BootstrapLoader::new(Duration::ZERO, 15, Some(1));
        let set = loader.working_set().unwrap();

        assert_eq!(set.len(), 45);
        for status in TokenStatus::ALL {
            let bucket = set.bucket(status);
            assert_eq!(bucket.len(), 15);
            assert!(bucket.iter().all(|t| t.status() == status));
            assert_eq!(
                bucket[0].id().as_str(),
                format!("{}-0", status.id_prefix())
            );
        }
    }

    #[test]
    fn test_empty_working_set() {
        let mut loader = BootstrapLoader::new(Duration::ZERO, 0, Some(1));
        assert!(loader.working_set().unwrap().is_empty());
    }
}
