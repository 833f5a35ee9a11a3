use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::AddOn;

use super::config::FinanceConfig;
use super::sanitize_amount;

/// Itemized tax result. Both bases are exposed so disclosure lines can show
/// what was taxed, not just the amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub main_tax: f64,
    pub trailer_tax: f64,
    /// Boat plus non-trailer taxable add-ons, after any trade-in credit.
    pub main_base: f64,
    /// Trailer-class taxable add-ons; never reduced by the credit.
    pub trailer_base: f64,
}

impl TaxBreakdown {
    pub fn total(&self) -> f64 {
        self.main_tax + self.trailer_tax
    }
}

/// Split the selection into the two tax bases and apply each rate.
///
/// Trailer-class add-ons are taxed at the trailer rate because towed
/// trailers register as road vehicles, not vessels. The trade-in credit
/// (when enabled) reduces the main base only, since the credit legally
/// attaches to the principal item; both bases floor at zero.
pub fn compute_tax(
    base_price: f64,
    addons: &[AddOn],
    selected_codes: &BTreeSet<String>,
    finance: &FinanceConfig,
) -> TaxBreakdown {
    let base_price = sanitize_amount(base_price);

    let mut trailer_total = 0.0;
    let mut non_trailer_total = 0.0;
    for addon in addons {
        if !addon.taxable || !selected_codes.contains(&addon.code) {
            continue;
        }
        if addon.is_trailer_class() {
            trailer_total += sanitize_amount(addon.price);
        } else {
            non_trailer_total += sanitize_amount(addon.price);
        }
    }

    let (main_pre_credit, trailer_pre_credit) = if finance.include_tax_on_addons {
        (base_price + non_trailer_total, trailer_total)
    } else {
        (base_price, 0.0)
    };

    let trade_credit = if finance.apply_trade_in_tax_credit {
        sanitize_amount(finance.trade_in_value)
    } else {
        0.0
    };

    let main_base = (main_pre_credit - trade_credit).max(0.0);
    let trailer_base = trailer_pre_credit.max(0.0);

    TaxBreakdown {
        main_tax: main_base * sanitize_amount(finance.tax_rate_pct) / 100.0,
        trailer_tax: trailer_base * sanitize_amount(finance.trailer_tax_rate_pct) / 100.0,
        main_base,
        trailer_base,
    }
}
