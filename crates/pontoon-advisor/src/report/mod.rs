//! Renderer-agnostic quote documents.

mod summary;

pub use summary::{format_usd, quote_summary, CustomerContact, QuoteSummary};
