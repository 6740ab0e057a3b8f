pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Quotation;
pub use repositories::{InMemoryQuotationRepository, MySqlQuotationRepository, QuotationRepository};
pub use services::{AnalyticsEngine, QuotationAnalyticsService};
