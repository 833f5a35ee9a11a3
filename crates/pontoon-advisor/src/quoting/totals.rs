use serde::{Deserialize, Serialize};

use super::tax::TaxBreakdown;

/// Fully itemized result of one quote computation.
///
/// Derived, never stored: rendering and persistence collaborators consume it
/// as-is and rebuild it whenever an input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Negotiated sale price of the selected item.
    pub base_price: f64,
    /// Every selected add-on, taxable or not.
    pub addon_subtotal: f64,
    /// Sum of both tax lines.
    pub tax: f64,
    pub tax_breakdown: TaxBreakdown,
    /// Cash price: base, add-ons, tax and fees, net of trade-in and payoff.
    pub out_the_door: f64,
    /// Out-the-door minus the down payment, floored at zero.
    pub amount_financed: f64,
    pub monthly_payment: f64,
    /// APR actually applied, after tier resolution.
    pub apr: f64,
    /// Term actually applied, after next-higher-band rounding.
    pub effective_term: u32,
    /// Trade-in value minus payoff; negative means the buyer is upside down.
    pub net_trade_equity: f64,
    /// The amount financed misses a lender minimum for the effective term.
    pub below_min_for_selected_term: bool,
    /// Advisory term when below minimums; equals `effective_term` otherwise.
    pub suggested_term: u32,
}
