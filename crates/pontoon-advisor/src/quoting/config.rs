use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::sanitize_amount;

/// One lender term band: the APR offered at a given term length in months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub term: u32,
    pub apr: f64,
}

/// Lender rate bands keyed by named credit tier.
///
/// Rows need not be sorted; resolution orders them by term. A missing tier
/// simply has no bands, which resolution treats the same as an empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateMatrix {
    pub excellent: Vec<RateRow>,
    pub good: Vec<RateRow>,
    pub fair: Vec<RateRow>,
}

impl RateMatrix {
    /// Rows backing the given tier. Manual pricing never consults a table.
    pub fn rows_for(&self, tier: &CreditTier) -> &[RateRow] {
        match tier {
            CreditTier::Excellent => &self.excellent,
            CreditTier::Good => &self.good,
            CreditTier::Fair => &self.fair,
            CreditTier::Manual { .. } => &[],
        }
    }
}

/// Credit bracket selecting lender pricing.
///
/// The named tiers index the rate matrix. `Manual` carries its own APR and
/// bypasses the matrix entirely: the quote uses the supplied APR at the
/// buyer's desired term, with no band rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Manual { apr: f64 },
}

impl CreditTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Manual { .. } => "Manual",
        }
    }
}

/// Dealer finance settings for one quoting session.
///
/// All rates are percentages (7.375 means 7.375%). Deserialization fills
/// missing fields from [`FinanceConfig::standard`], so a dealer file may
/// override only what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    /// Sales tax applied to the main base (boat plus non-trailer add-ons).
    pub tax_rate_pct: f64,
    /// Sales tax applied to trailer-class add-ons.
    pub trailer_tax_rate_pct: f64,
    pub doc_fee: f64,
    pub registration_fee: f64,
    /// Term the buyer asked for; rate resolution may round it up to a band.
    pub term_months: u32,
    pub down_payment: f64,
    pub trade_in_value: f64,
    /// Remaining loan balance on the trade-in.
    pub payoff: f64,
    /// When false, add-ons are excluded from both tax bases.
    pub include_tax_on_addons: bool,
    /// When true, the trade-in value reduces the main tax base.
    pub apply_trade_in_tax_credit: bool,
    pub credit_tier: CreditTier,
    pub rate_matrix: RateMatrix,
    /// Lender minimum amount financed by term; every threshold at or below
    /// the effective term must be met.
    pub min_amount_by_term: BTreeMap<u32, f64>,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FinanceConfig {
    /// House defaults: Minnesota-style dual tax rates, the lender's published
    /// rate sheet and minimum-advance schedule.
    pub fn standard() -> Self {
        Self {
            tax_rate_pct: 7.375,
            trailer_tax_rate_pct: 6.875,
            doc_fee: 199.0,
            registration_fee: 150.0,
            term_months: 180,
            down_payment: 5_000.0,
            trade_in_value: 0.0,
            payoff: 0.0,
            include_tax_on_addons: true,
            apply_trade_in_tax_credit: true,
            credit_tier: CreditTier::Excellent,
            rate_matrix: RateMatrix {
                excellent: rate_rows(&[(60, 5.99), (84, 6.19), (120, 6.49), (180, 6.99), (240, 7.49)]),
                good: rate_rows(&[(60, 7.49), (84, 7.69), (120, 7.99), (180, 8.49), (240, 8.99)]),
                fair: rate_rows(&[(60, 9.99), (84, 10.19), (120, 10.49), (180, 10.99), (240, 11.49)]),
            },
            min_amount_by_term: [(84, 15_000.0), (120, 20_000.0), (180, 30_000.0), (240, 40_000.0)]
                .into_iter()
                .collect(),
        }
    }

    /// Copy of the config with every monetary and rate field clamped to a
    /// finite non-negative value and the desired term floored at one month.
    ///
    /// Quote assembly runs on the sanitized copy so operator-entered garbage
    /// (negative fees, NaN from a bad parse) degrades to zero instead of
    /// poisoning the totals.
    pub fn sanitized(&self) -> Self {
        let mut clean = self.clone();
        clean.tax_rate_pct = sanitize_amount(self.tax_rate_pct);
        clean.trailer_tax_rate_pct = sanitize_amount(self.trailer_tax_rate_pct);
        clean.doc_fee = sanitize_amount(self.doc_fee);
        clean.registration_fee = sanitize_amount(self.registration_fee);
        clean.term_months = self.term_months.max(1);
        clean.down_payment = sanitize_amount(self.down_payment);
        clean.trade_in_value = sanitize_amount(self.trade_in_value);
        clean.payoff = sanitize_amount(self.payoff);
        if let CreditTier::Manual { apr } = self.credit_tier {
            clean.credit_tier = CreditTier::Manual {
                apr: sanitize_amount(apr),
            };
        }
        for rows in [
            &mut clean.rate_matrix.excellent,
            &mut clean.rate_matrix.good,
            &mut clean.rate_matrix.fair,
        ] {
            for row in rows {
                row.apr = sanitize_amount(row.apr);
            }
        }
        for minimum in clean.min_amount_by_term.values_mut() {
            *minimum = sanitize_amount(*minimum);
        }
        clean
    }
}

fn rate_rows(pairs: &[(u32, f64)]) -> Vec<RateRow> {
    pairs
        .iter()
        .map(|(term, apr)| RateRow {
            term: *term,
            apr: *apr,
        })
        .collect()
}
