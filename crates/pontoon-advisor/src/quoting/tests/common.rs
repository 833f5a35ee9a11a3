use std::collections::BTreeSet;

use crate::catalog::{AddOn, CatalogItem, HullType};
use crate::quoting::{CreditTier, FinanceConfig, RateMatrix, RateRow};

pub(super) fn demo_boat() -> CatalogItem {
    CatalogItem {
        id: "tahoe-ltz".to_string(),
        brand: "Tahoe".to_string(),
        model: "LTZ 2385 QL".to_string(),
        year: Some(2024),
        length_ft: 23.0,
        hull: HullType::Tritoon,
        max_persons: 12,
        hp: 200,
        engine_brand: "Honda".to_string(),
        msrp: 84_995.0,
        sale_price: 71_995.0,
        available: true,
        location: "Dodge Center, MN".to_string(),
        stock_number: None,
        features: ["quad lounge", "rear lounge", "luxury", "family"]
            .into_iter()
            .collect(),
        image_url: String::new(),
        images: Vec::new(),
        description: None,
    }
}

pub(super) fn demo_addons() -> Vec<AddOn> {
    vec![
        AddOn {
            code: "TRAILER".to_string(),
            name: "Tandem Axle Trailer".to_string(),
            price: 4_995.0,
            taxable: true,
        },
        AddOn {
            code: "COVER".to_string(),
            name: "Full Mooring Cover".to_string(),
            price: 1_195.0,
            taxable: true,
        },
        AddOn {
            code: "WARRANTY".to_string(),
            name: "Extended Warranty (5yr)".to_string(),
            price: 1_895.0,
            taxable: false,
        },
        AddOn {
            code: "ELECTRONICS".to_string(),
            name: "GPS/Depth + Stereo Upgrade".to_string(),
            price: 1_595.0,
            taxable: true,
        },
    ]
}

pub(super) fn selection(codes: &[&str]) -> BTreeSet<String> {
    codes.iter().map(|code| (*code).to_string()).collect()
}

/// Manual-tier finance with both tax rates live and everything else zeroed,
/// so individual effects stand out in totals.
pub(super) fn manual_finance(apr: f64, term_months: u32) -> FinanceConfig {
    FinanceConfig {
        tax_rate_pct: 7.375,
        trailer_tax_rate_pct: 6.875,
        doc_fee: 0.0,
        registration_fee: 0.0,
        term_months,
        down_payment: 0.0,
        trade_in_value: 0.0,
        payoff: 0.0,
        include_tax_on_addons: true,
        apply_trade_in_tax_credit: true,
        credit_tier: CreditTier::Manual { apr },
        rate_matrix: RateMatrix::default(),
        min_amount_by_term: Default::default(),
    }
}

pub(super) fn rate_table() -> Vec<RateRow> {
    vec![
        RateRow { term: 60, apr: 5.0 },
        RateRow { term: 120, apr: 6.0 },
        RateRow { term: 180, apr: 7.0 },
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
