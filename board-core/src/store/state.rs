use super::StoreError;
use crate::event_bus::StoreEvent;
use board::{Intent, PriceUpdate, SortKey, Token, TokenId, TokenStatus, WorkingSet};
use std::sync::Arc;

/// An immutable, cheaply clonable bucket column.
///
/// Tokens are shared between successive states. A price update allocates a new
/// column for the affected bucket and a new `Arc<Token>` for the affected
/// token only; every other `Arc` stays pointer-identical.
pub type TokenList = Arc<[Arc<Token>]>;

fn empty_list() -> TokenList {
    Vec::new().into()
}

/// The aggregate root of the board.
///
/// Fields are private: the only way to change an `AppState` is [`AppState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    tokens: [TokenList; 3],
    selected: Option<TokenId>,
    sort_key: SortKey,
    filter_text: String,
    ready: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tokens: [empty_list(), empty_list(), empty_list()],
            selected: None,
            sort_key: SortKey::default(),
            filter_text: String::new(),
            ready: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical (insertion-ordered) contents of a bucket.
    pub fn tokens(&self, bucket: TokenStatus) -> &TokenList {
        &self.tokens[bucket.index()]
    }

    pub fn len(&self) -> usize {
        self.tokens.iter().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a token by id within one bucket.
    pub fn find(&self, bucket: TokenStatus, id: &TokenId) -> Option<&Arc<Token>> {
        self.tokens(bucket).iter().find(|t| t.id() == id)
    }

    /// Looks up a token by id in any bucket.
    pub fn find_any(&self, id: &TokenId) -> Option<(TokenStatus, &Arc<Token>)> {
        TokenStatus::ALL
            .iter()
            .find_map(|&bucket| self.find(bucket, id).map(|t| (bucket, t)))
    }

    /// Raw selected id, not resolved against the buckets.
    pub fn selected_id(&self) -> Option<&TokenId> {
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

    /// Applies one intent.
    ///
    /// Returns the event describing the change, or `None` when the intent left
    /// the state exactly as it was. On `Err` the state is untouched.
    pub fn apply(&mut self, intent: Intent) -> Result<Option<StoreEvent>, StoreError> {
        match intent {
            Intent::BulkLoad(working_set) => self.bulk_load(working_set).map(Some),
            Intent::UpdatePrice(update) => Ok(self.update_price(update)),
            Intent::Select(id) => {
                if self.selected == id {
                    return Ok(None);
                }
                self.selected = id.clone();
                Ok(Some(StoreEvent::SelectionChanged { id }))
            }
            Intent::SetSortKey(sort_key) => {
                if self.sort_key == sort_key {
                    return Ok(None);
                }
                self.sort_key = sort_key;
                Ok(Some(StoreEvent::SortKeyChanged(sort_key)))
            }
            Intent::SetFilterText(text) => {
                if self.filter_text == text {
                    return Ok(None);
                }
                self.filter_text = text.clone();
                Ok(Some(StoreEvent::FilterTextChanged(text)))
            }
        }
    }

    fn bulk_load(&mut self, working_set: WorkingSet) -> Result<StoreEvent, StoreError> {
        if self.ready {
            return Err(StoreError::AlreadyLoaded);
        }

        let buckets = working_set.into_buckets();
        let counts = [buckets[0].len(), buckets[1].len(), buckets[2].len()];
        self.tokens = buckets.map(|tokens| tokens.into_iter().map(Arc::new).collect());
        self.ready = true;
        Ok(StoreEvent::Loaded { counts })
    }

    fn update_price(&mut self, update: PriceUpdate) -> Option<StoreEvent> {
        let PriceUpdate { bucket, id, price } = update;
        if !price.is_finite() {
            return None;
        }
        let price = price.max(0.0);

        let list = &self.tokens[bucket.index()];
        let index = list.iter().position(|t| t.id() == &id)?;
        let previous = list[index].price();
        if previous == price {
            return None;
        }

        let mut next: Vec<Arc<Token>> = list.to_vec();
        next[index] = Arc::new(list[index].with_price(price));
        self.tokens[bucket.index()] = next.into();

        Some(StoreEvent::PriceChanged {
            bucket,
            id,
            previous,
            current: price,
        })
    }
}
