//! Defines the data model for tradable tokens.
//!
//! A `Token` is created once (by the generator or a transport decoder) and is
//! afterwards treated as an immutable value. The only field that ever changes
//! is `price`, and it changes by producing a new value through
//! [`Token::with_price`], never by mutating a shared token in place.

use crate::error::TokenError;
use crate::model::identity::TokenId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle bucket of a token.
///
/// The status decides which bucket a token lives in and never changes for the
/// lifetime of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenStatus {
    /// Newly listed.
    New,
    /// Approaching the migration threshold.
    Stretch,
    /// Fully migrated.
    Migrated,
}

impl TokenStatus {
    /// All buckets, in display order.
    pub const ALL: [TokenStatus; 3] = [TokenStatus::New, TokenStatus::Stretch, TokenStatus::Migrated];

    /// Position of the bucket in [`TokenStatus::ALL`].
    pub fn index(self) -> usize {
        match self {
            TokenStatus::New => 0,
            TokenStatus::Stretch => 1,
            TokenStatus::Migrated => 2,
        }
    }

    /// Prefix used for generated ids in this bucket.
    pub fn id_prefix(self) -> &'static str {
        match self {
            TokenStatus::New => "new",
            TokenStatus::Stretch => "str",
            TokenStatus::Migrated => "mig",
        }
    }

    /// Inclusive range of bonding progress a token of this status may carry.
    pub fn progress_range(self) -> (u8, u8) {
        match self {
            TokenStatus::New => (0, 79),
            TokenStatus::Stretch => (80, 99),
            TokenStatus::Migrated => (100, 100),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenStatus::New => "new",
            TokenStatus::Stretch => "stretch",
            TokenStatus::Migrated => "migrated",
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStatus {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(TokenStatus::New),
            "stretch" => Ok(TokenStatus::Stretch),
            "migrated" => Ok(TokenStatus::Migrated),
            _ => Err(TokenError::UnknownStatus(s.to_string())),
        }
    }
}

/// A single tradable asset.
///
/// Decoding goes through the same rules as [`Token::new`] and
/// [`Token::with_price`]: progress is clamped into the status range, a negative
/// price becomes 0 and a non-finite price is refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    id: TokenId,
    symbol: String,
    name: String,
    /// Current unit price. Always >= 0.
    price: f64,
    /// Signed 24h change in percent. Informational, set at creation.
    change_24h: f64,
    volume: Option<f64>,
    mcap: f64,
    liquidity: f64,
    holders: u64,
    tx_count: Option<u64>,
    image: Option<String>,
    status: TokenStatus,
    /// Bonding progress 0-100, derived from `status` at creation.
    progress: u8,
    /// Creation time in Unix milliseconds.
    created: i64,
}

#[derive(Deserialize)]
struct RawToken {
    id: TokenId,
    symbol: String,
    name: String,
    price: f64,
    change_24h: f64,
    #[serde(default)]
    volume: Option<f64>,
    mcap: f64,
    liquidity: f64,
    holders: u64,
    #[serde(default)]
    tx_count: Option<u64>,
    #[serde(default)]
    image: Option<String>,
    status: TokenStatus,
    progress: u8,
    created: i64,
}

impl TryFrom<RawToken> for Token {
    type Error = TokenError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        if !raw.price.is_finite() {
            return Err(TokenError::InvalidPrice {
                id: raw.id,
                price: raw.price,
            });
        }

        let mut token = Token::new(raw.id, raw.symbol, raw.name, raw.status, raw.progress, raw.created)
            .with_change_24h(raw.change_24h)
            .with_mcap(raw.mcap)
            .with_liquidity(raw.liquidity)
            .with_holders(raw.holders)
            .with_price(raw.price);
        token.volume = raw.volume;
        token.tx_count = raw.tx_count;
        token.image = raw.image;
        Ok(token)
    }
}

impl Token {
    /// Creates a token with zeroed metrics.
    ///
    /// `progress` is clamped into the range allowed by `status`, so a token can
    /// never disagree with its own bucket. Metrics are filled in with the
    /// `with_*` builders.
    pub fn new(
        id: impl Into<TokenId>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        status: TokenStatus,
        progress: u8,
        created: i64,
    ) -> Self {
        let (lo, hi) = status.progress_range();
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            price: 0.0,
            change_24h: 0.0,
            volume: None,
            mcap: 0.0,
            liquidity: 0.0,
            holders: 0,
            tx_count: None,
            image: None,
            status,
            progress: progress.clamp(lo, hi),
            created,
        }
    }

    /// Returns a copy of this token carrying `price` (negative prices become 0).
    ///
    /// Every other field is carried over unchanged.
    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price: price.max(0.0),
            ..self.clone()
        }
    }

    pub fn with_change_24h(mut self, change_24h: f64) -> Self {
        self.change_24h = change_24h;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_mcap(mut self, mcap: f64) -> Self {
        self.mcap = mcap;
        self
    }

    pub fn with_liquidity(mut self, liquidity: f64) -> Self {
        self.liquidity = liquidity;
        self
    }

    pub fn with_holders(mut self, holders: u64) -> Self {
        self.holders = holders;
        self
    }

    pub fn with_tx_count(mut self, tx_count: u64) -> Self {
        self.tx_count = Some(tx_count);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn id(&self) -> &TokenId {
        &self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_24h(&self) -> f64 {
        self.change_24h
    }

    /// Trading volume, if known.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    pub fn mcap(&self) -> f64 {
        self.mcap
    }

    pub fn liquidity(&self) -> f64 {
        self.liquidity
    }

    pub fn holders(&self) -> u64 {
        self.holders
    }

    pub fn tx_count(&self) -> Option<u64> {
        self.tx_count
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn status(&self) -> TokenStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn is_migrated(&self) -> bool {
        self.status == TokenStatus::Migrated
    }

    /// First eight characters of the id, for compact detail headers.
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        match id.char_indices().nth(8) {
            Some((end, _)) => &id[..end],
            None => id,
        }
    }
}
