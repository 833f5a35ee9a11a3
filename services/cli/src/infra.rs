use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pontoon_advisor::{AddOn, CatalogItem, FinanceConfig, HullType};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;

/// Dealer-side document pairing the add-on sheet with finance settings.
/// A file may omit either key: no `addons` means an empty sheet, no
/// `finance` means the house defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DealerFile {
    #[serde(default)]
    pub(crate) addons: Vec<AddOn>,
    #[serde(default)]
    pub(crate) finance: FinanceConfig,
}

pub(crate) fn load_inventory(path: Option<&Path>) -> Result<Vec<CatalogItem>, AppError> {
    match path {
        Some(path) => {
            let items: Vec<CatalogItem> = read_json(path)?;
            info!(count = items.len(), path = %path.display(), "loaded inventory");
            if items.is_empty() {
                return Err(AppError::EmptyInventory);
            }
            Ok(items)
        }
        None => {
            info!("no inventory file configured; using built-in samples");
            Ok(sample_inventory())
        }
    }
}

pub(crate) fn load_dealer_file(path: Option<&Path>) -> Result<DealerFile, AppError> {
    match path {
        Some(path) => {
            let dealer: DealerFile = read_json(path)?;
            info!(
                addons = dealer.addons.len(),
                path = %path.display(),
                "loaded dealer file"
            );
            Ok(dealer)
        }
        None => {
            info!("no dealer file configured; using built-in add-ons and house finance defaults");
            Ok(DealerFile {
                addons: sample_addons(),
                finance: FinanceConfig::standard(),
            })
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AppError::Json {
        path: PathBuf::from(path),
        source,
    })
}

pub(crate) fn find_item<'a>(
    inventory: &'a [CatalogItem],
    id: &str,
) -> Result<&'a CatalogItem, AppError> {
    inventory
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::UnknownItem(id.to_string()))
}

/// Check requested codes against the dealer sheet so a typo fails loudly
/// instead of silently pricing without the add-on.
pub(crate) fn validate_addon_codes(addons: &[AddOn], codes: &[String]) -> Result<(), AppError> {
    for code in codes {
        if !addons.iter().any(|addon| &addon.code == code) {
            return Err(AppError::UnknownAddOn(code.clone()));
        }
    }
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn sample_inventory() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "tahoe-ltz-2385-ql-honda".to_string(),
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
            stock_number: Some("BW-1042".to_string()),
            features: ["quad lounge", "rear lounge", "luxury", "family"]
                .into_iter()
                .collect(),
            image_url: "https://images.unsplash.com/photo-1526498460520-4c246339dccb?q=80&w=1600&auto=format&fit=crop".to_string(),
            images: Vec::new(),
            description: Some(
                "Beautiful tri-toon set up for family cruising on big lakes.".to_string(),
            ),
        },
        CatalogItem {
            id: "avalon-lsz-2280-mercury".to_string(),
            brand: "Avalon".to_string(),
            model: "LSZ 2280".to_string(),
            year: Some(2024),
            length_ft: 22.0,
            hull: HullType::Pontoon,
            max_persons: 11,
            hp: 150,
            engine_brand: "Mercury".to_string(),
            msrp: 62_995.0,
            sale_price: 54_995.0,
            available: true,
            location: "Madison Lake, MN".to_string(),
            stock_number: Some("BW-1051".to_string()),
            features: ["rear lounge", "family", "fish"].into_iter().collect(),
            image_url: String::new(),
            images: Vec::new(),
            description: Some("Versatile family cruiser with a fishing bow.".to_string()),
        },
        CatalogItem {
            id: "princecraft-vectra-23-yamaha".to_string(),
            brand: "Princecraft".to_string(),
            model: "Vectra 23 XT".to_string(),
            year: Some(2025),
            length_ft: 23.0,
            hull: HullType::Tritoon,
            max_persons: 13,
            hp: 225,
            engine_brand: "Yamaha".to_string(),
            msrp: 92_995.0,
            sale_price: 83_995.0,
            available: true,
            location: "Dodge Center, MN".to_string(),
            stock_number: Some("BW-1063".to_string()),
            features: ["quad lounge", "luxury", "performance"].into_iter().collect(),
            image_url: String::new(),
            images: Vec::new(),
            description: Some("Performance tri-toon for big water and watersports.".to_string()),
        },
        CatalogItem {
            id: "bentley-elite-223-suzuki".to_string(),
            brand: "Bentley".to_string(),
            model: "Elite 223 Swingback".to_string(),
            year: Some(2023),
            length_ft: 22.0,
            hull: HullType::Pontoon,
            max_persons: 10,
            hp: 115,
            engine_brand: "Suzuki".to_string(),
            msrp: 54_995.0,
            sale_price: 46_995.0,
            available: false,
            location: "Madison Lake, MN".to_string(),
            stock_number: Some("BW-0988".to_string()),
            features: ["swingback", "family"].into_iter().collect(),
            image_url: String::new(),
            images: Vec::new(),
            description: Some("Sold unit awaiting delivery.".to_string()),
        },
    ]
}

pub(crate) fn sample_addons() -> Vec<AddOn> {
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
