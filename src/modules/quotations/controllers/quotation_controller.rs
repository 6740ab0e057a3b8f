use actix_cors::Cors;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, warn};

use crate::config::AppConfig;
use crate::core::{AppError, Result};
use crate::middleware::RequestIdValue;
use crate::modules::quotations::services::QuotationAnalyticsService;

/// Query parameters for the tax summary endpoint
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TaxSummaryQuery {
    /// `startDate`: start of the period (inclusive, format: YYYY-MM-DD)
    pub start_date: Option<String>,
    /// `endDate`: end of the period (inclusive, format: YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl TaxSummaryQuery {
    /// Picks the first `startDate` and `endDate` out of raw query pairs.
    /// Repeated parameters after the first are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        Self {
            start_date: first("startDate"),
            end_date: first("endDate"),
        }
    }
}

/// Query extractor errors answer with the JSON envelope instead of plain text
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), "Rejected query string: {}", err);
        AppError::invalid_query(err.to_string()).into()
    })
}

/// Turns a service result into the response envelope. `context` labels
/// unexpected failures.
fn respond<T: Serialize>(
    req: &HttpRequest,
    result: Result<T>,
    app: &AppConfig,
    context: &str,
) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            let request_id = RequestIdValue::of(req);
            if e.is_client_error() {
                warn!(request_id = %request_id, "{}: {}", context, e);
            } else {
                error!(request_id = %request_id, "{}: {:?}", context, e);
            }
            e.to_response(context, app.expose_error_detail)
        }
    }
}

/// GET /api/quotations/revenue-analysis
pub async fn revenue_analysis(
    req: HttpRequest,
    service: web::Data<QuotationAnalyticsService>,
    app: web::Data<AppConfig>,
) -> HttpResponse {
    respond(
        &req,
        service.revenue_analysis().await,
        &app,
        "Failed to calculate revenue analysis",
    )
}

/// GET /api/quotations/{id}/discount-analysis
pub async fn discount_analysis(
    req: HttpRequest,
    service: web::Data<QuotationAnalyticsService>,
    app: web::Data<AppConfig>,
    id: web::Path<String>,
) -> HttpResponse {
    respond(
        &req,
        service.discount_analysis(&id).await,
        &app,
        "Failed to calculate discount analysis",
    )
}

/// GET /api/quotations/profitability-by-chef
pub async fn profitability_by_chef(
    req: HttpRequest,
    service: web::Data<QuotationAnalyticsService>,
    app: web::Data<AppConfig>,
) -> HttpResponse {
    respond(
        &req,
        service.profitability_by_chef().await,
        &app,
        "Failed to calculate profitability by chef",
    )
}

/// GET /api/quotations/tax-summary?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
pub async fn tax_summary(
    req: HttpRequest,
    service: web::Data<QuotationAnalyticsService>,
    app: web::Data<AppConfig>,
    query: web::Query<Vec<(String, String)>>,
) -> HttpResponse {
    let query = TaxSummaryQuery::from_pairs(&query);
    respond(
        &req,
        service
            .tax_summary(query.start_date.as_deref(), query.end_date.as_deref())
            .await,
        &app,
        "Failed to calculate tax summary",
    )
}

/// CORS policy for the dashboard. `"*"` opens the API to any origin.
pub fn cors_policy(allowed_origin: &str) -> Cors {
    let cors = if allowed_origin == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(allowed_origin)
    };

    cors.allowed_methods(vec!["GET", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

/// Configure routes for the quotations module
pub fn configure_routes(cfg: &mut web::ServiceConfig, allowed_origin: &str) {
    cfg.service(
        web::scope("/api/quotations")
            .wrap(cors_policy(allowed_origin))
            .app_data(query_config())
            .route("/revenue-analysis", web::get().to(revenue_analysis))
            .route("/profitability-by-chef", web::get().to(profitability_by_chef))
            .route("/tax-summary", web::get().to(tax_summary))
            .route("/{id}/discount-analysis", web::get().to(discount_analysis)),
    );
}
