//! Synthetic token generation.
//!
//! Produces tokens with random content but a shape fixed by their status, for
//! bootstrapping a board without a live listing source.

use crate::model::identity::TokenId;
use crate::model::token::{Token, TokenStatus};
use rand::Rng;

/// Creates a random token for `status`.
///
/// Symbol, price and metrics are random. Progress is drawn from the range the
/// status allows: `[0, 79]` for new, `[80, 99]` for stretch and exactly 100 for
/// migrated tokens.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R, id: impl Into<TokenId>, status: TokenStatus) -> Token {
    let id = id.into();
    let (lo, hi) = status.progress_range();
    let progress = rng.gen_range(lo..=hi);

    let symbol: String = (0..4).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
    let name = format!(
        "Project {}",
        id.as_str().chars().take(4).collect::<String>().to_uppercase()
    );
    let created = chrono::Utc::now().timestamp_millis() - rng.gen_range(0..10_000_000i64);

    Token::new(id, symbol, name, status, progress, created)
        .with_change_24h(rng.gen_range(-20.0..20.0))
        .with_volume(rng.gen_range(0..1_000_000u64) as f64)
        .with_mcap(rng.gen_range(0..5_000_000u64) as f64)
        .with_liquidity(rng.gen_range(0..200_000u64) as f64)
        .with_holders(rng.gen_range(0..1_000))
        .with_tx_count(rng.gen_range(0..5_000))
        .with_price(rng.gen_range(0.0..0.05))
}

/// Generates `count` tokens for `status` with ids `{prefix}-{i}`.
pub fn generate_bucket<R: Rng + ?Sized>(rng: &mut R, status: TokenStatus, count: usize) -> Vec<Token> {
    (0..count)
        .map(|i| generate_token(rng, format!("{}-{}", status.id_prefix(), i), status))
        .collect()
}
