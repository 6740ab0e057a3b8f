mod analytics_engine;
mod analytics_service;

pub use analytics_engine::AnalyticsEngine;
pub use analytics_service::QuotationAnalyticsService;
