pub mod health;
pub mod quotations;

use actix_web::web;

/// Register every application route
pub fn configure(cfg: &mut web::ServiceConfig, allowed_origin: &str) {
    health::controllers::configure(cfg);
    quotations::controllers::configure(cfg, allowed_origin);
}
