use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pontoon_advisor::{BuyerAnswers, CreditTier, CustomerContact, FinanceConfig, WaterBody};

use crate::config::AppConfig;
use crate::demo::{run_demo, run_match, run_quote};
use crate::error::AppError;
use crate::telemetry;

/// APR assumed for manual pricing when no --apr override is given.
const DEFAULT_MANUAL_APR: f64 = 7.99;

#[derive(Parser, Debug)]
#[command(
    name = "Pontoon Advisor",
    about = "Rank pontoon inventory against buyer answers and build itemized quotes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the showroom demo: ranked matches plus a sample quote (default command)
    Demo(DemoArgs),
    /// Rank inventory against a buyer questionnaire
    Match(MatchArgs),
    /// Build an itemized quote for one inventory item
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Inventory JSON file (defaults to ADVISOR_INVENTORY, then built-in samples)
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// Dealer add-on/finance JSON file (defaults to ADVISOR_DEALER_FILE, then built-ins)
    #[arg(long)]
    pub(crate) dealer: Option<PathBuf>,
    /// Quote date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Only print ranked matches; skip the sample quote.
    #[arg(long)]
    pub(crate) skip_quote: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Inventory JSON file (defaults to ADVISOR_INVENTORY, then built-in samples)
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// Target budget in dollars
    #[arg(long)]
    pub(crate) budget: Option<f64>,
    /// Expected passenger count
    #[arg(long)]
    pub(crate) party_size: Option<u32>,
    /// Planned activity tag (repeatable), e.g. --activity fish
    #[arg(long = "activity")]
    pub(crate) activities: Vec<String>,
    /// Water the boat will mostly run
    #[arg(long, value_enum)]
    pub(crate) water: Option<WaterArg>,
    /// Preferred engine brand
    #[arg(long)]
    pub(crate) engine: Option<String>,
    /// Desired layout tag (repeatable), e.g. --layout "rear lounge"
    #[arg(long = "layout")]
    pub(crate) layouts: Vec<String>,
    /// Preferred boat brand
    #[arg(long)]
    pub(crate) brand: Option<String>,
    /// Print the ranked list as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl MatchArgs {
    pub(crate) fn answers(&self) -> BuyerAnswers {
        BuyerAnswers {
            budget: self.budget,
            party_size: self.party_size,
            activities: self.activities.iter().map(String::as_str).collect(),
            water_body: self.water.map(WaterArg::into_domain),
            engine_pref: self.engine.clone(),
            layout_prefs: self.layouts.iter().map(String::as_str).collect(),
            brand_pref: self.brand.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Inventory JSON file (defaults to ADVISOR_INVENTORY, then built-in samples)
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// Dealer add-on/finance JSON file (defaults to ADVISOR_DEALER_FILE, then built-ins)
    #[arg(long)]
    pub(crate) dealer: Option<PathBuf>,
    /// Inventory id of the boat to quote
    #[arg(long)]
    pub(crate) item: String,
    /// Add-on code to include (repeatable), e.g. --addon TRAILER
    #[arg(long = "addon")]
    pub(crate) addons: Vec<String>,
    /// Override the desired term in months
    #[arg(long)]
    pub(crate) term: Option<u32>,
    /// Override the down payment
    #[arg(long)]
    pub(crate) down_payment: Option<f64>,
    /// Override the trade-in value
    #[arg(long)]
    pub(crate) trade_in: Option<f64>,
    /// Override the remaining payoff on the trade-in
    #[arg(long)]
    pub(crate) payoff: Option<f64>,
    /// Override the credit tier used for rate resolution
    #[arg(long, value_enum)]
    pub(crate) tier: Option<TierArg>,
    /// APR for manual pricing (used with --tier manual; defaults to 7.99)
    #[arg(long)]
    pub(crate) apr: Option<f64>,
    /// Customer name for the quote header
    #[arg(long)]
    pub(crate) customer_name: Option<String>,
    /// Customer email for the quote header
    #[arg(long)]
    pub(crate) customer_email: Option<String>,
    /// Customer phone for the quote header
    #[arg(long)]
    pub(crate) customer_phone: Option<String>,
    /// Quote date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the totals as JSON instead of the printable summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuoteArgs {
    /// Command-line overrides applied onto the dealer's finance settings.
    pub(crate) fn apply_overrides(&self, mut finance: FinanceConfig) -> FinanceConfig {
        if let Some(term) = self.term {
            finance.term_months = term;
        }
        if let Some(down_payment) = self.down_payment {
            finance.down_payment = down_payment;
        }
        if let Some(trade_in) = self.trade_in {
            finance.trade_in_value = trade_in;
        }
        if let Some(payoff) = self.payoff {
            finance.payoff = payoff;
        }
        if let Some(tier) = self.tier {
            finance.credit_tier = tier.into_domain(self.apr);
        }
        finance
    }

    pub(crate) fn customer(&self) -> CustomerContact {
        CustomerContact {
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
            phone: self.customer_phone.clone(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum WaterArg {
    /// Big open water
    Large,
    /// Small lakes and rivers
    Small,
}

impl WaterArg {
    fn into_domain(self) -> WaterBody {
        match self {
            Self::Large => WaterBody::Large,
            Self::Small => WaterBody::Small,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum TierArg {
    Excellent,
    Good,
    Fair,
    Manual,
}

impl TierArg {
    fn into_domain(self, apr: Option<f64>) -> CreditTier {
        match self {
            Self::Excellent => CreditTier::Excellent,
            Self::Good => CreditTier::Good,
            Self::Fair => CreditTier::Fair,
            Self::Manual => CreditTier::Manual {
                apr: apr.unwrap_or(DEFAULT_MANUAL_APR),
            },
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Match(args) => run_match(args, &config),
        Command::Quote(args) => run_quote(args, &config),
    }
}
