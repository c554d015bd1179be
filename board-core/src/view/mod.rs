//! Derived per-bucket views.
//!
//! A column is a pure function of `(bucket contents, filter text, sort key)`:
//! first a case-insensitive substring filter on symbol or name, then a stable
//! descending sort. [`derive_view`] computes it from scratch; [`ViewEngine`]
//! memoizes it per bucket and only recomputes a column when one of its three
//! inputs changed.

use crate::selection::{self, SelectedToken};
use crate::store::{AppState, TokenList};
use board::{SortKey, Token, TokenStatus};
use log::trace;
use std::sync::Arc;

/// Filters and sorts one bucket.
///
/// The returned tokens are the same `Arc`s as the input; nothing is copied.
pub fn derive_view(tokens: &[Arc<Token>], filter_text: &str, sort_key: SortKey) -> Vec<Arc<Token>> {
    let mut out: Vec<Arc<Token>> = if filter_text.is_empty() {
        tokens.to_vec()
    } else {
        let needle = filter_text.to_lowercase();
        tokens
            .iter()
            .filter(|t| matches_filter(t, &needle))
            .cloned()
            .collect()
    };
    sort_tokens(&mut out, sort_key);
    out
}

/// `needle` must already be lower-cased.
pub fn matches_filter(token: &Token, needle: &str) -> bool {
    token.symbol().to_lowercase().contains(needle) || token.name().to_lowercase().contains(needle)
}

/// Stable, descending sort by `sort_key`. Equal keys keep their relative order.
pub fn sort_tokens(tokens: &mut [Arc<Token>], sort_key: SortKey) {
    match sort_key {
        SortKey::Recency => tokens.sort_by(|a, b| b.created().cmp(&a.created())),
        SortKey::Volume => tokens.sort_by(|a, b| {
            let (a, b) = (a.volume().unwrap_or(0.0), b.volume().unwrap_or(0.0));
            b.total_cmp(&a)
        }),
        SortKey::AbsoluteChange => tokens.sort_by(|a, b| {
            b.change_24h().abs().total_cmp(&a.change_24h().abs())
        }),
    }
}

#[derive(Debug, Clone)]
struct CachedColumn {
    source: TokenList,
    filter_text: String,
    sort_key: SortKey,
    output: TokenList,
}

impl CachedColumn {
    fn is_fresh(&self, source: &TokenList, filter_text: &str, sort_key: SortKey) -> bool {
        Arc::ptr_eq(&self.source, source) && self.sort_key == sort_key && self.filter_text == filter_text
    }
}

/// Per-reader memo of the three derived columns.
///
/// Each reader owns its engine, so reads never touch shared state. A price
/// update in one bucket replaces only that bucket's column in the store, which
/// leaves the other two cached columns fresh.
#[derive(Debug, Default)]
pub struct ViewEngine {
    columns: [Option<CachedColumn>; 3],
    recomputations: [u64; 3],
}

impl ViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The derived column for `bucket` in `state`.
    pub fn view(&mut self, state: &AppState, bucket: TokenStatus) -> TokenList {
        let i = bucket.index();
        let source = state.tokens(bucket);

        if let Some(cached) = &self.columns[i] {
            if cached.is_fresh(source, state.filter_text(), state.sort_key()) {
                return cached.output.clone();
            }
        }

        let output: TokenList = derive_view(source, state.filter_text(), state.sort_key()).into();
        self.recomputations[i] += 1;
        trace!(
            "ViewEngine: recomputed {} column ({} of {} tokens)",
            bucket,
            output.len(),
            source.len()
        );
        self.columns[i] = Some(CachedColumn {
            source: source.clone(),
            filter_text: state.filter_text().to_string(),
            sort_key: state.sort_key(),
            output: output.clone(),
        });
        output
    }

    /// How many times the column for `bucket` has been computed.
    pub fn recomputations(&self, bucket: TokenStatus) -> u64 {
        self.recomputations[bucket.index()]
    }

    /// Everything the presentation layer needs for one frame.
    pub fn read_model(&mut self, state: &AppState) -> ReadModel {
        ReadModel {
            columns: TokenStatus::ALL.map(|bucket| self.view(state, bucket)),
            selected: selection::resolve(state),
            sort_key: state.sort_key(),
            filter_text: state.filter_text().to_string(),
            ready: state.is_ready(),
        }
    }
}

/// Outbound read model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadModel {
    columns: [TokenList; 3],
    selected: Option<SelectedToken>,
    sort_key: SortKey,
    filter_text: String,
    ready: bool,
}

impl ReadModel {
    pub fn column(&self, bucket: TokenStatus) -> &[Arc<Token>] {
        &self.columns[bucket.index()]
    }

    pub fn selected(&self) -> Option<&SelectedToken> {
        self.selected.as_ref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
