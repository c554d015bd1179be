//! A random walk price generator.
//!
//! Each tick picks a bucket uniformly, then a token uniformly within it, and
//! moves its price by a uniform step in `[-jitter, +jitter]`, clamped at 0.

use super::PriceFeed;
use crate::config::BoardConfig;
use crate::store::AppState;
use board::{PriceUpdate, TokenStatus};
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomWalkFeed {
    rng: StdRng,
    jitter: f64,
}

impl RandomWalkFeed {
    pub fn new(jitter: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let jitter = if jitter.is_finite() {
            jitter.abs()
        } else {
            warn!("RandomWalkFeed: non-finite jitter {}, prices will hold still", jitter);
            0.0
        };
        Self { rng, jitter }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        // Offset so the feed does not replay the bootstrap's random sequence.
        Self::new(config.price_jitter, config.seed.map(|s| s.wrapping_add(1)))
    }
}

impl PriceFeed for RandomWalkFeed {
    fn next_update(&mut self, state: &AppState) -> Option<PriceUpdate> {
        let bucket = TokenStatus::ALL[self.rng.gen_range(0..TokenStatus::ALL.len())];
        let tokens = state.tokens(bucket);
        if tokens.is_empty() {
            return None;
        }

        let token = &tokens[self.rng.gen_range(0..tokens.len())];
        let delta = self.rng.gen_range(-self.jitter..=self.jitter);
        let price = (token.price() + delta).max(0.0);

        Some(PriceUpdate::new(bucket, token.id().clone(), price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{Intent, Token, WorkingSet};

    fn state(tokens: Vec<Token>) -> AppState {
        let mut state = AppState::new();
        state
            .apply(Intent::BulkLoad(WorkingSet::partition(tokens).unwrap()))
            .unwrap();
        state
    }

    #[test]
    fn test_steps_stay_within_jitter() {
        let state = state(vec![
            Token::new("n1", "A", "A", TokenStatus::New, 1, 0).with_price(1.0),
            Token::new("s1", "B", "B", TokenStatus::Stretch, 90, 0).with_price(2.0),
            Token::new("m1", "C", "C", TokenStatus::Migrated, 100, 0).with_price(3.0),
        ]);
        let mut feed = RandomWalkFeed::new(0.001, Some(3));

        for _ in 0..1_000 {
            let update = feed.next_update(&state).expect("all buckets are populated");
            let token = state.find(update.bucket(), update.id()).expect("known token");
            assert!(
                (update.price() - token.price()).abs() <= 0.001 + 1e-12,
                "step too large: {} -> {}",
                token.price(),
                update.price()
            );
        }
    }

    #[test]
    fn test_price_never_negative() {
        let state = state(vec![Token::new("n1", "A", "A", TokenStatus::New, 1, 0)]);
        let mut feed = RandomWalkFeed::new(0.5, Some(11));

        for _ in 0..500 {
            if let Some(update) = feed.next_update(&state) {
                assert!(update.price() >= 0.0);
            }
        }
    }

    #[test]
    fn test_non_finite_jitter_holds_prices() {
        let state = state(vec![Token::new("n1", "A", "A", TokenStatus::New, 1, 0).with_price(2.0)]);

        for jitter in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut feed = RandomWalkFeed::new(jitter, Some(4));
            for _ in 0..50 {
                if let Some(update) = feed.next_update(&state) {
                    assert_eq!(update.price(), 2.0, "jitter {} moved the price", jitter);
                }
            }
        }
    }

    #[test]
    fn test_empty_buckets_yield_nothing() {
        let mut feed = RandomWalkFeed::new(0.001, Some(5));
        let empty = AppState::new();
        for _ in 0..100 {
            assert!(feed.next_update(&empty).is_none());
        }
    }

    #[test]
    fn test_covers_every_bucket() {
        let state = state(vec![
            Token::new("n1", "A", "A", TokenStatus::New, 1, 0),
            Token::new("s1", "B", "B", TokenStatus::Stretch, 90, 0),
            Token::new("m1", "C", "C", TokenStatus::Migrated, 100, 0),
        ]);
        let mut feed = RandomWalkFeed::new(0.001, Some(8));
        let mut seen = [false; 3];
        for _ in 0..300 {
            if let Some(update) = feed.next_update(&state) {
                seen[update.bucket().index()] = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }
}
