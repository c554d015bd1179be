//! The token under inspection.
//!
//! The store keeps only the selected id. Reads re-resolve it against the
//! current buckets, so a detail view always shows the live price, and an id
//! that is not on the board reads as "no selection".

use crate::store::AppState;
use board::{Token, TokenStatus};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedToken {
    bucket: TokenStatus,
    token: Arc<Token>,
}

impl SelectedToken {
    pub fn bucket(&self) -> TokenStatus {
        self.bucket
    }

    pub fn token(&self) -> &Arc<Token> {
        &self.token
    }
}

/// Resolves the selected id against `state`.
pub fn resolve(state: &AppState) -> Option<SelectedToken> {
    let id = state.selected_id()?;
    state.find_any(id).map(|(bucket, token)| SelectedToken {
        bucket,
        token: token.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::{Intent, WorkingSet};

    fn state_with(token: Token) -> AppState {
        let mut state = AppState::new();
        state
            .apply(Intent::BulkLoad(WorkingSet::partition(vec![token]).unwrap()))
            .unwrap();
        state
    }

    #[test]
    fn test_no_selection() {
        let state = state_with(Token::new("s1", "AAA", "Alpha", TokenStatus::Stretch, 85, 0));
        assert!(resolve(&state).is_none());
    }

    #[test]
    fn test_selection_follows_live_price() {
        let mut state = state_with(
            Token::new("s1", "AAA", "Alpha", TokenStatus::Stretch, 85, 0).with_price(1.0),
        );
        state.apply(Intent::select("s1")).unwrap();
        assert_eq!(resolve(&state).unwrap().token().price(), 1.0);

        state
            .apply(Intent::update_price(TokenStatus::Stretch, "s1", 2.0))
            .unwrap();

        let selected = resolve(&state).unwrap();
        assert_eq!(selected.bucket(), TokenStatus::Stretch);
        assert_eq!(selected.token().price(), 2.0);
    }

    #[test]
    fn test_unknown_id_reads_as_none() {
        let mut state = state_with(Token::new("s1", "AAA", "Alpha", TokenStatus::Stretch, 85, 0));
        state.apply(Intent::select("ghost")).unwrap();
        assert!(resolve(&state).is_none());
    }
}
