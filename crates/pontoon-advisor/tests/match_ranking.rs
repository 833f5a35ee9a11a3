use pontoon_advisor::matching::{rank, UNAVAILABLE_SCORE};
use pontoon_advisor::{BuyerAnswers, CatalogItem, HullType, WaterBody};

fn floor_stock() -> Vec<CatalogItem> {
    let base = CatalogItem {
        id: String::new(),
        brand: String::new(),
        model: String::new(),
        year: Some(2024),
        length_ft: 22.0,
        hull: HullType::Pontoon,
        max_persons: 10,
        hp: 150,
        engine_brand: "Mercury".to_string(),
        msrp: 60_000.0,
        sale_price: 50_000.0,
        available: true,
        location: "Dodge Center, MN".to_string(),
        stock_number: None,
        features: Default::default(),
        image_url: String::new(),
        images: Vec::new(),
        description: None,
    };

    vec![
        CatalogItem {
            id: "tahoe-ltz-2385".to_string(),
            brand: "Tahoe".to_string(),
            model: "LTZ 2385 QL".to_string(),
            length_ft: 23.0,
            hull: HullType::Tritoon,
            max_persons: 12,
            hp: 200,
            engine_brand: "Honda".to_string(),
            msrp: 84_995.0,
            sale_price: 71_995.0,
            features: ["quad lounge", "rear lounge", "luxury", "family"]
                .into_iter()
                .collect(),
            ..base.clone()
        },
        CatalogItem {
            id: "avalon-lsz-2280".to_string(),
            brand: "Avalon".to_string(),
            model: "LSZ 2280".to_string(),
            max_persons: 11,
            msrp: 62_995.0,
            sale_price: 54_995.0,
            features: ["family", "fish", "rear lounge"].into_iter().collect(),
            ..base.clone()
        },
        CatalogItem {
            id: "bentley-elite-223".to_string(),
            brand: "Bentley".to_string(),
            model: "Elite 223".to_string(),
            available: false,
            sale_price: 58_995.0,
            ..base
        },
    ]
}

#[test]
fn guided_answers_rank_the_floor_stock() {
    let answers = BuyerAnswers {
        budget: Some(70_000.0),
        party_size: Some(10),
        activities: ["family"].into_iter().collect(),
        water_body: Some(WaterBody::Large),
        engine_pref: Some("honda".to_string()),
        layout_prefs: ["rear lounge"].into_iter().collect(),
        brand_pref: Some("tahoe".to_string()),
    };

    let ranked = rank(&answers, &floor_stock());

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].item.id, "tahoe-ltz-2385");
    assert_eq!(ranked[0].score, 100);
    assert_eq!(ranked[1].item.id, "avalon-lsz-2280");
    assert_eq!(ranked[1].score, 42);
    assert_eq!(ranked[2].score, UNAVAILABLE_SCORE);
    assert!(ranked[2].is_excluded());
}

#[test]
fn partially_answered_questionnaires_still_rank() {
    let answers: BuyerAnswers =
        serde_json::from_str(r#"{"budget": 60000.0, "activities": ["Fish"]}"#)
            .expect("parse partial questionnaire");

    let ranked = rank(&answers, &floor_stock());

    // Budget proximity plus the case-folded activity tag win out.
    assert_eq!(ranked[0].item.id, "avalon-lsz-2280");
    assert_eq!(ranked[0].score, 38);
    assert_eq!(ranked[1].item.id, "tahoe-ltz-2385");
    assert_eq!(ranked[1].score, 10);
}

#[test]
fn silent_questionnaires_leave_the_catalog_order_alone() {
    let ranked = rank(&BuyerAnswers::default(), &floor_stock());

    assert_eq!(ranked[0].item.id, "tahoe-ltz-2385");
    assert_eq!(ranked[1].item.id, "avalon-lsz-2280");
    assert_eq!(ranked[0].score, 0);
    assert_eq!(ranked[1].score, 0);

    // The sold unit still sinks even when nothing else separates items.
    assert_eq!(ranked[2].item.id, "bentley-elite-223");
    assert!(ranked[2].is_excluded());
}
