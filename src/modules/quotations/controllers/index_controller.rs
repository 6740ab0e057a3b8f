use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

/// One entry of the endpoint directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// Static description of the API served at `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDirectory {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "List of available endpoints"),
    (
        "GET",
        "/api/quotations/revenue-analysis",
        "Total and average revenue across quotations",
    ),
    (
        "GET",
        "/api/quotations/<id>/discount-analysis",
        "Discount impact for a single quotation",
    ),
    (
        "GET",
        "/api/quotations/profitability-by-chef",
        "Profitability grouped by chef",
    ),
    (
        "GET",
        "/api/quotations/tax-summary",
        "Tax summary (optional: ?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD)",
    ),
];

impl EndpointDirectory {
    pub fn current() -> Self {
        Self {
            message: "Quotation Analytics API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: ENDPOINTS
                .iter()
                .map(|(method, path, description)| EndpointInfo {
                    method: method.to_string(),
                    path: path.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(EndpointDirectory::current())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
