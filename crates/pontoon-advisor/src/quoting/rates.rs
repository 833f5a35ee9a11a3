use super::config::{CreditTier, RateMatrix, RateRow};
use super::sanitize_amount;

/// Resolve a desired term against a tier's rate table by rounding up to the
/// next offered band.
///
/// Lenders price in discrete term bands, and a request between bands must
/// move up, never down: quoting a 72-month request at the 60-month rate
/// would promise pricing the lender will not honor. When the desired term
/// exceeds every band the longest band wins; an empty table yields a
/// zero-APR row at the desired term so downstream math stays defined.
pub fn next_higher_term(table: &[RateRow], desired_term: u32) -> RateRow {
    let mut sorted: Vec<RateRow> = table.to_vec();
    sorted.sort_by_key(|row| row.term);
    sorted
        .iter()
        .find(|row| row.term >= desired_term)
        .or_else(|| sorted.last())
        .copied()
        .unwrap_or(RateRow {
            term: desired_term,
            apr: 0.0,
        })
}

/// Pick the effective term and APR for the configured credit tier.
///
/// Named tiers resolve through [`next_higher_term`] on their table. Manual
/// pricing is a distinct path: the operator-supplied APR applies verbatim at
/// the desired term, with no band rounding.
pub fn select_rate(matrix: &RateMatrix, tier: &CreditTier, desired_term: u32) -> RateRow {
    match tier {
        CreditTier::Manual { apr } => RateRow {
            term: desired_term,
            apr: sanitize_amount(*apr),
        },
        named => next_higher_term(matrix.rows_for(named), desired_term),
    }
}
