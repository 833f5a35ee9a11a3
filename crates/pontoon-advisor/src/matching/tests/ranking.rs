use super::common::*;
use crate::matching::{rank, BuyerAnswers};

#[test]
fn orders_best_match_first() {
    let catalog = vec![runabout(), flagship()];

    let ranked = rank(&full_answers(), &catalog);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.id, "flagship");
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let first = boat("first", "Avalon", 50_000.0);
    let second = boat("second", "Avalon", 50_000.0);
    let catalog = vec![first, second];

    let ranked = rank(&budget_only(50_000.0), &catalog);

    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].item.id, "first");
    assert_eq!(ranked[1].item.id, "second");
}

#[test]
fn unavailable_inventory_sinks_below_everything() {
    let mut sold = flagship();
    sold.available = false;
    let catalog = vec![sold, runabout()];

    let ranked = rank(&BuyerAnswers::default(), &catalog);

    assert_eq!(ranked[0].item.id, "runabout");
    assert_eq!(ranked[0].score, 0);
    assert!(ranked[1].is_excluded());
}

#[test]
fn poor_fits_are_excluded_not_just_ranked_low() {
    let overpriced = boat("over", "Avalon", 200_000.0);
    let catalog = vec![overpriced];

    let ranked = rank(&budget_only(50_000.0), &catalog);

    assert_eq!(ranked[0].score, -10);
    assert!(ranked[0].is_excluded());
}

#[test]
fn ranking_never_drops_items() {
    let catalog = vec![flagship(), runabout(), boat("third", "Bentley", 39_000.0)];

    let ranked = rank(&full_answers(), &catalog);

    assert_eq!(ranked.len(), catalog.len());
    for item in &catalog {
        assert!(ranked.iter().any(|scored| scored.item.id == item.id));
    }
}
