//! Quotation Analytics Library
//!
//! Read-only reporting over stored quotations: revenue, discount impact,
//! per-chef profitability and tax summaries.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::quotations;
pub use modules::quotations::{AnalyticsEngine, QuotationAnalyticsService};
