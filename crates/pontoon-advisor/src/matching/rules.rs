use crate::catalog::{CatalogItem, HullType};

use super::answers::{BuyerAnswers, WaterBody};
use super::UNAVAILABLE_SCORE;

/// Budget tolerances: within 15% of target scores strongly, within 30%
/// still scores, anything wider counts against the item.
const BUDGET_TIGHT: f64 = 0.15;
const BUDGET_LOOSE: f64 = 0.30;

/// Horsepower cutoffs used by the water-body rules.
const BIG_WATER_MIN_HP: u32 = 200;
const SMALL_WATER_MAX_HP: u32 = 150;

/// Score one catalog item against the buyer's answers.
///
/// Additive rules, one per answered field, evaluated independently; the
/// order rules run in never changes the result. Unavailable inventory
/// short-circuits to the exclusion sentinel before any rule runs.
pub(crate) fn score_item(answers: &BuyerAnswers, item: &CatalogItem) -> i32 {
    if !item.available {
        return UNAVAILABLE_SCORE;
    }

    let mut score = 0;

    if let Some(budget) = answers.effective_budget() {
        let deviation = (item.sale_price - budget).abs() / budget;
        if deviation <= BUDGET_TIGHT {
            score += 30;
        } else if deviation <= BUDGET_LOOSE {
            score += 10;
        } else {
            score -= 10;
        }
    }

    if let Some(party) = answers.effective_party_size() {
        score += if item.max_persons >= party { 20 } else { -15 };
    }

    for activity in answers.activities.iter() {
        if item.features.contains(activity) {
            score += 8;
        }
    }

    match answers.water_body {
        Some(WaterBody::Large) => {
            if item.hull == HullType::Tritoon {
                score += 15;
            }
            if item.hp >= BIG_WATER_MIN_HP {
                score += 10;
            }
        }
        Some(WaterBody::Small) => {
            if item.hp <= SMALL_WATER_MAX_HP {
                score += 8;
            }
        }
        None => {}
    }

    if let Some(pref) = answers.effective_engine_pref() {
        score += if item.engine_brand.trim().eq_ignore_ascii_case(pref) {
            6
        } else {
            -2
        };
    }

    for layout in answers.layout_prefs.iter() {
        if item.features.contains(layout) {
            score += 6;
        }
    }

    if let Some(pref) = answers.effective_brand_pref() {
        if item.brand.trim().eq_ignore_ascii_case(pref) {
            score += 5;
        }
    }

    score
}
