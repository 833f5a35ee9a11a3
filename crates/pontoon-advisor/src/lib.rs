//! Pure quoting and match-scoring core for the Boat World pontoon sales guide.
//!
//! Two engines cover the arithmetic the sales floor depends on: the quoting
//! pipeline (rate band resolution, dual-base sales tax, term eligibility and
//! the amortized payment) and the match scorer that ranks inventory against a
//! buyer's stated preferences. Every operation is a deterministic function of
//! its inputs. The crate performs no I/O, keeps no state and never reads a
//! clock; callers re-invoke on input change and may cache results freely.

pub mod catalog;
pub mod matching;
pub mod quoting;
pub mod report;
pub mod tags;

pub use catalog::{AddOn, CatalogItem, HullType};
pub use matching::{BuyerAnswers, ScoredItem, WaterBody};
pub use quoting::{CreditTier, FinanceConfig, QuoteTotals, RateMatrix, RateRow, TaxBreakdown};
pub use report::{CustomerContact, QuoteSummary};
pub use tags::TagSet;
