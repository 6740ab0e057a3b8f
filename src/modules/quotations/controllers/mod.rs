mod index_controller;
mod quotation_controller;

pub use index_controller::{EndpointDirectory, EndpointInfo};
pub use quotation_controller::{cors_policy, TaxSummaryQuery};

/// Register the endpoint directory and the `/api/quotations` scope
pub fn configure(cfg: &mut actix_web::web::ServiceConfig, allowed_origin: &str) {
    index_controller::configure_routes(cfg);
    quotation_controller::configure_routes(cfg, allowed_origin);
}
