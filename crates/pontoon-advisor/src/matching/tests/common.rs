use crate::catalog::{CatalogItem, HullType};
use crate::matching::{BuyerAnswers, WaterBody};

pub(super) fn boat(id: &str, brand: &str, sale_price: f64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        brand: brand.to_string(),
        model: "Test Model".to_string(),
        year: Some(2024),
        length_ft: 22.0,
        hull: HullType::Pontoon,
        max_persons: 10,
        hp: 115,
        engine_brand: "Mercury".to_string(),
        msrp: sale_price * 1.15,
        sale_price,
        available: true,
        location: "Dodge Center, MN".to_string(),
        stock_number: None,
        features: Default::default(),
        image_url: String::new(),
        images: Vec::new(),
        description: None,
    }
}

/// Flagship tritoon that can satisfy every scoring rule at once.
pub(super) fn flagship() -> CatalogItem {
    CatalogItem {
        model: "LTZ 2385 QL".to_string(),
        length_ft: 23.0,
        hull: HullType::Tritoon,
        max_persons: 12,
        hp: 200,
        engine_brand: "Honda".to_string(),
        features: ["quad lounge", "rear lounge", "luxury", "family"]
            .into_iter()
            .collect(),
        ..boat("flagship", "Tahoe", 71_995.0)
    }
}

/// Modest two-log boat for small-water and budget scenarios.
pub(super) fn runabout() -> CatalogItem {
    CatalogItem {
        model: "Vectra 21".to_string(),
        length_ft: 21.0,
        max_persons: 9,
        features: ["fish", "family"].into_iter().collect(),
        ..boat("runabout", "Princecraft", 42_500.0)
    }
}

/// Answers that line up with every attribute of [`flagship`].
pub(super) fn full_answers() -> BuyerAnswers {
    BuyerAnswers {
        budget: Some(70_000.0),
        party_size: Some(10),
        activities: ["family"].into_iter().collect(),
        water_body: Some(WaterBody::Large),
        engine_pref: Some("honda".to_string()),
        layout_prefs: ["rear lounge"].into_iter().collect(),
        brand_pref: Some("tahoe".to_string()),
    }
}

pub(super) fn budget_only(budget: f64) -> BuyerAnswers {
    BuyerAnswers {
        budget: Some(budget),
        ..Default::default()
    }
}
