use std::collections::BTreeMap;

use super::config::RateRow;

/// True when the amount financed misses any minimum-advance threshold at or
/// below the effective term.
///
/// Thresholds escalate with commitment length and are cumulative: a
/// 120-month loan must clear the 84-month floor as well as its own. An
/// empty schedule never flags.
pub fn below_minimums(
    amount_financed: f64,
    effective_term: u32,
    minimums: &BTreeMap<u32, f64>,
) -> bool {
    minimums
        .iter()
        .any(|(term, minimum)| effective_term >= *term && amount_financed < *minimum)
}

/// Shorter offered term to advise when the effective term misses a minimum.
///
/// Shortening the term only deactivates thresholds, so the advisory search
/// walks the tier's offered terms below the effective one and takes the
/// largest that clears every applicable threshold. When none does, it falls
/// back to the shortest offered term; when the tier offers nothing (manual
/// pricing), the effective term itself comes back unchanged.
pub fn suggest_term(
    amount_financed: f64,
    effective_term: u32,
    minimums: &BTreeMap<u32, f64>,
    table: &[RateRow],
) -> u32 {
    let mut terms: Vec<u32> = table.iter().map(|row| row.term).collect();
    terms.sort_unstable();

    terms
        .iter()
        .copied()
        .filter(|term| *term < effective_term && !below_minimums(amount_financed, *term, minimums))
        .last()
        .or_else(|| terms.first().copied())
        .unwrap_or(effective_term)
}
