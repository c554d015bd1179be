use crate::error::TokenError;
use crate::model::token::{Token, TokenStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The payload of a bulk load: one token sequence per bucket.
///
/// Every token sits in the bucket matching its status and ids are unique, so a
/// store loaded from a `WorkingSet` starts out partitioned correctly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingSet")]
pub struct WorkingSet {
    new: Vec<Token>,
    stretch: Vec<Token>,
    migrated: Vec<Token>,
}

#[derive(Deserialize)]
struct RawWorkingSet {
    new: Vec<Token>,
    stretch: Vec<Token>,
    migrated: Vec<Token>,
}

impl TryFrom<RawWorkingSet> for WorkingSet {
    type Error = TokenError;

    fn try_from(raw: RawWorkingSet) -> Result<Self, Self::Error> {
        WorkingSet::new(raw.new, raw.stretch, raw.migrated)
    }
}

impl WorkingSet {
    /// Builds a working set from explicit bucket contents.
    ///
    /// Fails if a token's status disagrees with the bucket it was given in, or
    /// if an id is repeated anywhere in the set.
    pub fn new(
        new: Vec<Token>,
        stretch: Vec<Token>,
        migrated: Vec<Token>,
    ) -> Result<Self, TokenError> {
        let mut seen = HashSet::new();
        for (expected, tokens) in [
            (TokenStatus::New, &new),
            (TokenStatus::Stretch, &stretch),
            (TokenStatus::Migrated, &migrated),
        ] {
            for token in tokens {
                if token.status() != expected {
                    return Err(TokenError::StatusMismatch {
                        id: token.id().clone(),
                        expected,
                        found: token.status(),
                    });
                }
                if !seen.insert(token.id().clone()) {
                    return Err(TokenError::DuplicateId(token.id().clone()));
                }
            }
        }

        Ok(Self {
            new,
            stretch,
            migrated,
        })
    }

    /// Sorts arbitrary tokens into buckets by status, keeping their relative order.
    pub fn partition(tokens: impl IntoIterator<Item = Token>) -> Result<Self, TokenError> {
        let mut new = Vec::new();
        let mut stretch = Vec::new();
        let mut migrated = Vec::new();
        for token in tokens {
            match token.status() {
                TokenStatus::New => new.push(token),
                TokenStatus::Stretch => stretch.push(token),
                TokenStatus::Migrated => migrated.push(token),
            }
        }
        Self::new(new, stretch, migrated)
    }

    pub fn bucket(&self, status: TokenStatus) -> &[Token] {
        match status {
            TokenStatus::New => &self.new,
            TokenStatus::Stretch => &self.stretch,
            TokenStatus::Migrated => &self.migrated,
        }
    }

    pub fn len(&self) -> usize {
        self.new.len() + self.stretch.len() + self.migrated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits the set into its three buckets, in `TokenStatus::ALL` order.
    pub fn into_buckets(self) -> [Vec<Token>; 3] {
        [self.new, self.stretch, self.migrated]
    }
}
