use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// Code substring that classifies an add-on as trailer-class for tax
/// purposes.
pub(crate) const TRAILER_CODE_MARKER: &str = "TRAILER";

/// Hull configuration of a pontoon boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullType {
    /// Two logs.
    Pontoon,
    /// Three logs; handles chop and higher horsepower better.
    Tritoon,
}

impl HullType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pontoon => "pontoon",
            Self::Tritoon => "tritoon",
        }
    }
}

/// One sellable unit from the dealer's inventory.
///
/// The engines treat items as immutable snapshots for the duration of a
/// session; whoever loads the catalog owns freshness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    pub length_ft: f64,
    pub hull: HullType,
    /// Rated passenger capacity.
    pub max_persons: u32,
    pub hp: u32,
    pub engine_brand: String,
    pub msrp: f64,
    pub sale_price: f64,
    /// Sold or on-hold units stay in the catalog but must never be offered.
    pub available: bool,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_number: Option<String>,
    /// Lowercased feature tags, e.g. "rear lounge", "family".
    #[serde(default)]
    pub features: TagSet,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogItem {
    /// Display title, e.g. "2024 Tahoe LTZ 2385 QL".
    pub fn title(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", year, self.brand, self.model),
            None => format!("{} {}", self.brand, self.model),
        }
    }
}

/// Dealer-installed extra that can be attached to a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Stable identifier used for selection, e.g. "TRAILER".
    pub code: String,
    pub name: String,
    pub price: f64,
    /// Non-taxable add-ons (service contracts and the like) never enter a
    /// tax base.
    pub taxable: bool,
}

impl AddOn {
    /// Trailer-class add-ons accrue to the trailer tax base and sit outside
    /// the trade-in credit.
    pub fn is_trailer_class(&self) -> bool {
        self.code.to_ascii_uppercase().contains(TRAILER_CODE_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOn, CatalogItem, HullType};

    fn trailer() -> AddOn {
        AddOn {
            code: "TRAILER".to_string(),
            name: "Tandem Axle Trailer".to_string(),
            price: 4995.0,
            taxable: true,
        }
    }

    #[test]
    fn trailer_classification_ignores_code_case() {
        let mut addon = trailer();
        assert!(addon.is_trailer_class());

        addon.code = "pkg_trailer_spare".to_string();
        assert!(addon.is_trailer_class());

        addon.code = "COVER".to_string();
        assert!(!addon.is_trailer_class());
    }

    #[test]
    fn title_includes_year_when_known() {
        let item = CatalogItem {
            id: "p1".to_string(),
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
            features: Default::default(),
            image_url: String::new(),
            images: Vec::new(),
            description: None,
        };

        assert_eq!(item.title(), "2024 Tahoe LTZ 2385 QL");

        let unknown_year = CatalogItem { year: None, ..item };
        assert_eq!(unknown_year.title(), "Tahoe LTZ 2385 QL");
    }
}
