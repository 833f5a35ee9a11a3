//! Quote computation.
//!
//! Rate band resolution, dual-base sales tax, lender term eligibility and
//! amortized payment math, assembled by [`build_quote`] into one itemized
//! [`QuoteTotals`]. Each stage is also exported on its own for callers that
//! need a single figure (a payment preview on a slider, say) without a full
//! quote.

pub mod config;
pub mod eligibility;
pub mod payment;
pub mod rates;
pub mod tax;
mod totals;

#[cfg(test)]
mod tests;

pub use config::{CreditTier, FinanceConfig, RateMatrix, RateRow};
pub use eligibility::{below_minimums, suggest_term};
pub use payment::monthly_payment;
pub use rates::{next_higher_term, select_rate};
pub use tax::{compute_tax, TaxBreakdown};
pub use totals::QuoteTotals;

use std::collections::BTreeSet;

use crate::catalog::{AddOn, CatalogItem};

/// Clamp a monetary or rate input: non-finite values count as zero,
/// negatives floor at zero.
pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Assemble the full itemized quote for the selected item.
///
/// Returns `None` only when nothing is selected; every other input
/// combination produces a defined result. Selection codes must match add-on
/// codes exactly; codes with no matching add-on contribute nothing. Rate
/// resolution runs before eligibility so the minimum-advance check sees the
/// effective term, not the requested one.
pub fn build_quote(
    selected: Option<&CatalogItem>,
    addons: &[AddOn],
    selected_codes: &BTreeSet<String>,
    finance: &FinanceConfig,
) -> Option<QuoteTotals> {
    let item = selected?;
    let finance = finance.sanitized();

    let base_price = sanitize_amount(item.sale_price);

    let addon_subtotal: f64 = addons
        .iter()
        .filter(|addon| selected_codes.contains(&addon.code))
        .map(|addon| sanitize_amount(addon.price))
        .sum();

    let picked = rates::select_rate(
        &finance.rate_matrix,
        &finance.credit_tier,
        finance.term_months,
    );
    let effective_term = picked.term.max(1);

    let breakdown = tax::compute_tax(base_price, addons, selected_codes, &finance);
    let tax = breakdown.total();

    let out_the_door = (base_price
        + addon_subtotal
        + tax
        + finance.doc_fee
        + finance.registration_fee
        - finance.trade_in_value
        + finance.payoff)
        .max(0.0);

    let amount_financed = (out_the_door - finance.down_payment).max(0.0);

    let below = eligibility::below_minimums(
        amount_financed,
        effective_term,
        &finance.min_amount_by_term,
    );
    let suggested_term = if below {
        eligibility::suggest_term(
            amount_financed,
            effective_term,
            &finance.min_amount_by_term,
            finance.rate_matrix.rows_for(&finance.credit_tier),
        )
    } else {
        effective_term
    };

    Some(QuoteTotals {
        base_price,
        addon_subtotal,
        tax,
        tax_breakdown: breakdown,
        out_the_door,
        amount_financed,
        monthly_payment: payment::monthly_payment(amount_financed, picked.apr, effective_term),
        apr: picked.apr,
        effective_term,
        net_trade_equity: finance.trade_in_value - finance.payoff,
        below_min_for_selected_term: below,
        suggested_term,
    })
}
