//! Catalog ranking against buyer answers.
//!
//! A single pure scoring pass over the catalog. Scores are additive integers
//! with no fixed scale; they order items, nothing more. Negative means
//! "excluded", not merely "poor fit": unavailable inventory is pinned below
//! every attainable score so it can never surface in a ranked list.

pub mod answers;
mod rules;

#[cfg(test)]
mod tests;

pub use answers::{BuyerAnswers, WaterBody};

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Sentinel score for unavailable inventory.
pub const UNAVAILABLE_SCORE: i32 = -1;

/// One catalog item paired with its match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: CatalogItem,
    pub score: i32,
}

impl ScoredItem {
    /// Excluded items must never be offered to the buyer.
    pub fn is_excluded(&self) -> bool {
        self.score < 0
    }
}

/// Score a single item against the buyer's answers.
pub fn score(answers: &BuyerAnswers, item: &CatalogItem) -> i32 {
    rules::score_item(answers, item)
}

/// Rank the whole catalog, best match first.
///
/// The sort is stable, so equal scores keep their catalog order and the same
/// inputs always present the same list.
pub fn rank(answers: &BuyerAnswers, catalog: &[CatalogItem]) -> Vec<ScoredItem> {
    let mut ranked: Vec<ScoredItem> = catalog
        .iter()
        .map(|item| ScoredItem {
            item: item.clone(),
            score: rules::score_item(answers, item),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
