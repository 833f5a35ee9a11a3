use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{AddOn, CatalogItem};
use crate::quoting::{FinanceConfig, QuoteTotals};

/// Customer details echoed on the quote header. Everything is optional; a
/// quote without a customer on file still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Quote document as a headline, flat body lines and the lender disclaimer.
///
/// Deliberately renderer-agnostic: the plain-text export, a PDF layout and a
/// message body all consume the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub headline: String,
    pub prepared_on: NaiveDate,
    pub lines: Vec<String>,
    pub disclaimer: String,
}

impl QuoteSummary {
    /// Plain-text rendering, one body line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headline);
        out.push('\n');
        out.push_str(&format!("Prepared {}\n\n", self.prepared_on));
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.disclaimer);
        out.push('\n');
        out
    }
}

/// Build the printable summary for a computed quote.
///
/// `totals` must come from the same item, add-on selection and finance
/// settings, or the lines will disagree with each other; the core cannot
/// verify that pairing. Finance figures are shown sanitized, matching what
/// the totals were computed from.
pub fn quote_summary(
    item: &CatalogItem,
    addons: &[AddOn],
    selected_codes: &BTreeSet<String>,
    finance: &FinanceConfig,
    totals: &QuoteTotals,
    customer: &CustomerContact,
    prepared_on: NaiveDate,
) -> QuoteSummary {
    let finance = finance.sanitized();
    let mut lines = Vec::new();

    lines.push(format!(
        "Customer: {}  |  Email: {}  |  Phone: {}",
        customer.name.as_deref().unwrap_or("(name)"),
        customer.email.as_deref().unwrap_or(""),
        customer.phone.as_deref().unwrap_or(""),
    ));
    lines.push(format!(
        "Selected: {} {} ({}ft {}) - ${}",
        item.brand,
        item.model,
        item.length_ft,
        item.hull.label(),
        format_usd(item.sale_price),
    ));
    lines.push(format!(
        "Location: {} | Engine: {} {}hp",
        item.location, item.engine_brand, item.hp
    ));
    lines.push(String::new());

    lines.push("Add-ons:".to_string());
    for addon in addons {
        if selected_codes.contains(&addon.code) {
            lines.push(format!("  [x] {}  ${}", addon.name, format_usd(addon.price)));
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "Trade-in: ${}  |  Payoff: ${}  |  Net: ${}",
        format_usd(finance.trade_in_value),
        format_usd(finance.payoff),
        format_usd(totals.net_trade_equity),
    ));
    lines.push(format!(
        "Tax main ({}%): ${}  (base after credit: ${})",
        finance.tax_rate_pct,
        format_usd(totals.tax_breakdown.main_tax),
        format_usd(totals.tax_breakdown.main_base),
    ));
    lines.push(format!(
        "Tax trailer ({}%): ${}  (base: ${})",
        finance.trailer_tax_rate_pct,
        format_usd(totals.tax_breakdown.trailer_tax),
        format_usd(totals.tax_breakdown.trailer_base),
    ));
    lines.push(format!(
        "Doc fee: ${} | Registration: ${}",
        format_usd(finance.doc_fee),
        format_usd(finance.registration_fee),
    ));
    lines.push(format!("Down payment: ${}", format_usd(finance.down_payment)));
    lines.push(String::new());

    lines.push(format!("Out-the-door: ${}", format_usd(totals.out_the_door)));
    lines.push(format!(
        "Amount financed: ${}",
        format_usd(totals.amount_financed)
    ));
    lines.push(format!(
        "Est. monthly ({} mo @ {:.2}%): ${}",
        totals.effective_term,
        totals.apr,
        format_usd(totals.monthly_payment),
    ));
    if totals.below_min_for_selected_term {
        lines.push(format!(
            "NOTE: Selected term {} months may not be bank-eligible at this amount. \
             Suggested term: {} months. Subject to lender approval.",
            totals.effective_term, totals.suggested_term,
        ));
    }

    QuoteSummary {
        headline: format!(
            "Quote for {}",
            customer.name.as_deref().unwrap_or("Customer")
        ),
        prepared_on,
        lines,
        disclaimer: "Subject to lender approval.".to_string(),
    }
}

/// Whole-dollar display with thousands separators, e.g. 71995 -> "71,995".
/// Negative amounts keep their sign; non-finite input renders as zero.
pub fn format_usd(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::format_usd;

    #[test]
    fn formats_whole_dollars_with_separators() {
        assert_eq!(format_usd(0.0), "0");
        assert_eq!(format_usd(999.4), "999");
        assert_eq!(format_usd(999.5), "1,000");
        assert_eq!(format_usd(71_995.0), "71,995");
        assert_eq!(format_usd(1_234_567.0), "1,234,567");
    }

    #[test]
    fn keeps_sign_and_survives_bad_input() {
        assert_eq!(format_usd(-450.0), "-450");
        assert_eq!(format_usd(f64::NAN), "0");
        assert_eq!(format_usd(f64::INFINITY), "0");
    }
}
