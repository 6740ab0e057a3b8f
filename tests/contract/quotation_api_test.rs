// Contract tests for the quotation analytics endpoints
//
// Checks status codes, field names and reference figures for:
// - GET /
// - GET /api/quotations/revenue-analysis
// - GET /api/quotations/{id}/discount-analysis
// - GET /api/quotations/profitability-by-chef
// - GET /api/quotations/tax-summary

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::Value;

#[actix_web::test]
async fn test_index_lists_endpoints() {
    let app = init_test_app!(repository(vec![]));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Quotation Analytics API");
    assert!(body["version"].is_string());

    let paths: Vec<&str> = body["endpoints"]
        .as_array()
        .expect("endpoints is an array")
        .iter()
        .filter_map(|e| e["path"].as_str())
        .collect();
    assert!(paths.contains(&"/api/quotations/revenue-analysis"));
    assert!(paths.contains(&"/api/quotations/tax-summary"));
}

#[actix_web::test]
async fn test_revenue_analysis_contract() {
    let app = init_test_app!(repository(vec![
        QuotationBuilder::new(1).total_amount(dec!(100)).build(),
        QuotationBuilder::new(2).total_amount(dec!(250.50)).build(),
        QuotationBuilder::new(3).build(),
    ]));

    let req = test::TestRequest::get()
        .uri("/api/quotations/revenue-analysis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_has_fields(
        &body,
        &["totalRevenue", "averageQuotationValue", "totalQuotations"],
    );
    assert_eq!(body["totalQuotations"], 3);
    assert_money(&body, "totalRevenue", 350.50);
    assert_money(&body, "averageQuotationValue", 116.83);
}

#[actix_web::test]
async fn test_revenue_analysis_empty_store() {
    let app = init_test_app!(repository(vec![]));

    let req = test::TestRequest::get()
        .uri("/api/quotations/revenue-analysis")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalQuotations"], 0);
    assert_money(&body, "totalRevenue", 0.0);
    assert_money(&body, "averageQuotationValue", 0.0);
}

#[actix_web::test]
async fn test_discount_analysis_contract() {
    let app = init_test_app!(repository(vec![discounted_quotation(7).build()]));

    let uri = format!("/api/quotations/{}/discount-analysis", object_id(7));
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_has_fields(
        &body,
        &[
            "quotationId",
            "originalSubtotal",
            "discountType",
            "discountValue",
            "discountAmount",
            "discountPercentage",
            "totalWithoutDiscount",
            "finalTotal",
            "savingsForClient",
            "profitMarginLost",
        ],
    );
    assert_eq!(body["quotationId"], object_id(7));
    assert_eq!(body["discountType"], "percentage");
    assert_money(&body, "originalSubtotal", 1000.0);
    assert_money(&body, "discountPercentage", 15.0);
    assert_money(&body, "totalWithoutDiscount", 1160.0);
    assert_money(&body, "finalTotal", 1010.0);
    assert_money(&body, "savingsForClient", 150.0);
    assert_money(&body, "profitMarginLost", 15.0);
}

#[actix_web::test]
async fn test_discount_analysis_accepts_uppercase_id() {
    let app = init_test_app!(repository(vec![discounted_quotation(7).build()]));

    let uri = format!(
        "/api/quotations/{}/discount-analysis",
        object_id(7).to_uppercase()
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["quotationId"], object_id(7));
}

#[actix_web::test]
async fn test_discount_analysis_invalid_id_is_400() {
    let app = init_test_app!(repository(vec![discounted_quotation(7).build()]));

    let req = test::TestRequest::get()
        .uri("/api/quotations/not-an-id/discount-analysis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "Invalid identifier");
}

#[actix_web::test]
async fn test_discount_analysis_unknown_id_is_404() {
    let app = init_test_app!(repository(vec![discounted_quotation(7).build()]));

    let uri = format!("/api/quotations/{}/discount-analysis", UNKNOWN_ID);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "Quotation not found");
    assert!(body["message"].as_str().unwrap().contains(UNKNOWN_ID));
}

#[actix_web::test]
async fn test_profitability_by_chef_contract() {
    let app = init_test_app!(repository(chef_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/profitability-by-chef")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let chefs = body.as_array().expect("ranking is an array");
    assert_eq!(chefs.len(), 1, "quotations without a chef are excluded");

    let chef = &chefs[0];
    assert_has_fields(
        chef,
        &[
            "chefId",
            "totalQuotations",
            "totalRevenue",
            "averageQuotationValue",
            "approvedQuotations",
            "pendingQuotations",
            "cancelledQuotations",
            "completedQuotations",
            "successRate",
        ],
    );
    assert_eq!(chef["chefId"], "A");
    assert_eq!(chef["totalQuotations"], 2);
    assert_eq!(chef["approvedQuotations"], 1);
    assert_eq!(chef["pendingQuotations"], 1);
    assert_money(chef, "totalRevenue", 300.0);
    assert_money(chef, "averageQuotationValue", 150.0);
    assert_money(chef, "successRate", 50.0);
}

#[actix_web::test]
async fn test_tax_summary_contract() {
    let app = init_test_app!(repository(dated_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/tax-summary")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_has_fields(
        &body,
        &[
            "period",
            "totalQuotations",
            "totalSubtotal",
            "totalDiscounts",
            "totalRevenue",
            "taxBreakdown",
            "averageTaxRate",
            "netRevenue",
        ],
    );
    assert_eq!(body["period"]["startDate"], "N/A");
    assert_eq!(body["period"]["endDate"], "N/A");
    assert_eq!(body["totalQuotations"], 6);
    assert_money(&body, "totalSubtotal", 600.0);
    assert_money(&body, "totalDiscounts", 60.0);
    assert_money(&body, "totalRevenue", 660.0);
    assert_money(&body, "averageTaxRate", 20.0);
    assert_money(&body, "netRevenue", 540.0);

    let breakdown = &body["taxBreakdown"];
    assert_money(breakdown, "ivaAmount", 96.0);
    assert_money(breakdown, "serviceAmount", 24.0);
    assert_money(breakdown, "otherAmount", 0.0);
    assert_money(breakdown, "totalTaxes", 120.0);
}

#[actix_web::test]
async fn test_tax_summary_single_day() {
    let app = init_test_app!(repository(dated_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/tax-summary?startDate=2026-01-01&endDate=2026-01-01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["period"]["startDate"], "2026-01-01");
    assert_eq!(body["period"]["endDate"], "2026-01-01");
    assert_eq!(body["totalQuotations"], 3);
    assert_money(&body, "totalRevenue", 330.0);
    assert_money(&body["taxBreakdown"], "totalTaxes", 60.0);
}

#[actix_web::test]
async fn test_tax_summary_malformed_date_is_400() {
    let app = init_test_app!(repository(dated_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/tax-summary?startDate=2026/01/01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "Invalid date format");
    assert!(body["message"].as_str().unwrap().contains("startDate"));
}

#[actix_web::test]
async fn test_repeated_calls_are_identical() {
    let app = init_test_app!(repository(dated_fixture()));

    for uri in [
        "/api/quotations/revenue-analysis",
        "/api/quotations/profitability-by-chef",
        "/api/quotations/tax-summary?startDate=2026-01-01",
    ] {
        let first: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request())
                .await;
        let second: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(first, second, "{uri}");
    }
}

#[actix_web::test]
async fn test_tax_summary_repeated_params_use_first_value() {
    let app = init_test_app!(repository(dated_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/tax-summary?startDate=2026-01-01&startDate=2026-01-02&endDate=2026-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["period"]["startDate"], "2026-01-01");
    assert_eq!(body["period"]["endDate"], "2026-01-01");
    assert_eq!(body["totalQuotations"], 3);
}

#[actix_web::test]
async fn test_tax_summary_ignores_unknown_params() {
    let app = init_test_app!(repository(dated_fixture()));

    let req = test::TestRequest::get()
        .uri("/api/quotations/tax-summary?foo=bar&endDate=")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalQuotations"], 6);
    assert_eq!(body["period"]["endDate"], "N/A");
}
