use std::collections::BTreeSet;

use chrono::Local;
use pontoon_advisor::matching::{rank, ScoredItem, UNAVAILABLE_SCORE};
use pontoon_advisor::quoting::build_quote;
use pontoon_advisor::report::{format_usd, quote_summary};
use pontoon_advisor::{BuyerAnswers, CustomerContact, TagSet, WaterBody};
use tracing::warn;

use crate::cli::{DemoArgs, MatchArgs, QuoteArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::infra;

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        inventory,
        dealer,
        date,
        skip_quote,
    } = args;

    let inventory_path = inventory.or_else(|| config.inventory_path.clone());
    let dealer_path = dealer.or_else(|| config.dealer_path.clone());
    let quote_date = date.unwrap_or_else(|| Local::now().date_naive());

    let catalog = infra::load_inventory(inventory_path.as_deref())?;
    let dealer = infra::load_dealer_file(dealer_path.as_deref())?;

    println!("Boat World pontoon advisor demo");
    println!(
        "Inventory: {} units | Add-on sheet: {} items | Credit tier: {}",
        catalog.len(),
        dealer.addons.len(),
        dealer.finance.credit_tier.label()
    );

    let answers = walk_in_answers();
    render_answers(&answers);

    let ranked = rank(&answers, &catalog);
    render_ranked(&ranked);

    if skip_quote {
        return Ok(());
    }

    let pick = match ranked.iter().find(|scored| !scored.is_excluded()) {
        Some(scored) => scored,
        None => {
            println!("\nNo available inventory to quote.");
            return Ok(());
        }
    };

    // First two sheet entries make a representative selection: with the
    // built-in sheet that is the trailer plus the mooring cover, which
    // exercises both tax bases.
    let selected: BTreeSet<String> = dealer
        .addons
        .iter()
        .take(2)
        .map(|addon| addon.code.clone())
        .collect();

    println!(
        "\nSample quote: {} with {} add-on(s)",
        pick.item.title(),
        selected.len()
    );

    let totals = build_quote(Some(&pick.item), &dealer.addons, &selected, &dealer.finance)
        .expect("quote exists for a selected item");
    let customer = CustomerContact {
        name: Some("Sam Rivers".to_string()),
        email: Some("sam.rivers@example.com".to_string()),
        phone: Some("(507) 555-0142".to_string()),
    };
    let summary = quote_summary(
        &pick.item,
        &dealer.addons,
        &selected,
        &dealer.finance,
        &totals,
        &customer,
        quote_date,
    );

    println!("\n{}", summary.to_text());

    match serde_json::to_string_pretty(&totals) {
        Ok(json) => println!("Quote totals payload:\n{json}"),
        Err(err) => println!("Quote totals payload unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_match(args: MatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let answers = args.answers();
    let inventory_path = args.inventory.or_else(|| config.inventory_path.clone());

    let catalog = infra::load_inventory(inventory_path.as_deref())?;
    let ranked = rank(&answers, &catalog);

    if args.json {
        match serde_json::to_string_pretty(&ranked) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("ranked payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_answers(&answers);
    render_ranked(&ranked);
    Ok(())
}

pub(crate) fn run_quote(args: QuoteArgs, config: &AppConfig) -> Result<(), AppError> {
    let inventory_path = args.inventory.clone().or_else(|| config.inventory_path.clone());
    let dealer_path = args.dealer.clone().or_else(|| config.dealer_path.clone());
    let quote_date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let catalog = infra::load_inventory(inventory_path.as_deref())?;
    let dealer = infra::load_dealer_file(dealer_path.as_deref())?;

    let item = infra::find_item(&catalog, &args.item)?;
    if !item.available {
        warn!(id = %item.id, "quoting an unavailable unit");
    }
    infra::validate_addon_codes(&dealer.addons, &args.addons)?;
    let selected: BTreeSet<String> = args.addons.iter().cloned().collect();

    let finance = args.apply_overrides(dealer.finance.clone());
    let totals = build_quote(Some(item), &dealer.addons, &selected, &finance)
        .expect("quote exists for a selected item");

    if args.json {
        match serde_json::to_string_pretty(&totals) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("quote payload unavailable: {err}"),
        }
        return Ok(());
    }

    let summary = quote_summary(
        item,
        &dealer.addons,
        &selected,
        &finance,
        &totals,
        &args.customer(),
        quote_date,
    );
    println!("{}", summary.to_text());
    Ok(())
}

/// Canned showroom questionnaire used by the demo.
fn walk_in_answers() -> BuyerAnswers {
    BuyerAnswers {
        budget: Some(70_000.0),
        party_size: Some(10),
        activities: ["family"].into_iter().collect(),
        water_body: Some(WaterBody::Large),
        engine_pref: Some("honda".to_string()),
        layout_prefs: ["rear lounge", "quad lounge"].into_iter().collect(),
        brand_pref: None,
    }
}

fn render_answers(answers: &BuyerAnswers) {
    println!("\nQuestionnaire");
    if let Some(budget) = answers.budget {
        println!("- Budget: ${}", format_usd(budget));
    }
    if let Some(party) = answers.party_size {
        println!("- Party size: {party}");
    }
    if !answers.activities.is_empty() {
        println!("- Activities: {}", join_tags(&answers.activities));
    }
    match answers.water_body {
        Some(WaterBody::Large) => println!("- Water: big open water"),
        Some(WaterBody::Small) => println!("- Water: small lakes and rivers"),
        None => {}
    }
    if let Some(engine) = answers.engine_pref.as_deref() {
        println!("- Engine preference: {engine}");
    }
    if !answers.layout_prefs.is_empty() {
        println!("- Layouts: {}", join_tags(&answers.layout_prefs));
    }
    if let Some(brand) = answers.brand_pref.as_deref() {
        println!("- Brand preference: {brand}");
    }
}

fn render_ranked(ranked: &[ScoredItem]) {
    println!("\nRanked matches");
    for (position, scored) in ranked.iter().enumerate() {
        if scored.is_excluded() {
            let reason = if scored.score == UNAVAILABLE_SCORE {
                "unavailable"
            } else {
                "poor fit"
            };
            println!(
                "{:>3}. {} | excluded ({reason})",
                position + 1,
                scored.item.title()
            );
        } else {
            println!(
                "{:>3}. {} | ${} | score {} | {}",
                position + 1,
                scored.item.title(),
                format_usd(scored.item.sale_price),
                scored.score,
                scored.item.location
            );
        }
    }
}

fn join_tags(tags: &TagSet) -> String {
    tags.iter().collect::<Vec<_>>().join(", ")
}
