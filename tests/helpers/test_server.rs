// Test Server Helpers
//
// Spawns a real HTTP server on a random port using actix-test, wired exactly
// like the binary: error logging, request ids, CORS and the JSON 404.

use std::sync::Arc;

use actix_web::{web, App};
use quotation_analytics::config::AppConfig;
use quotation_analytics::middleware::{self, ErrorHandler, RequestId};
use quotation_analytics::modules;
use quotation_analytics::quotations::QuotationRepository;
use quotation_analytics::QuotationAnalyticsService;

pub use actix_test::TestServer;

use super::TEST_ORIGIN;

/// Spawn a test server over `repository`.
///
/// The server stops when the returned `TestServer` drops.
///
/// # Example
/// ```no_run
/// let srv = spawn_test_server(repository(vec![]));
/// let response = srv.get("/health").send().await.unwrap();
/// assert_eq!(response.status(), 200);
/// ```
pub fn spawn_test_server<R>(repository: R) -> TestServer
where
    R: QuotationRepository + 'static,
{
    let repository: Arc<dyn QuotationRepository> = Arc::new(repository);
    let service = web::Data::new(QuotationAnalyticsService::new(repository));
    let app_config = web::Data::new(AppConfig::default());

    actix_test::start(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .app_data(service.clone())
            .app_data(app_config.clone())
            .configure(|cfg| modules::configure(cfg, TEST_ORIGIN))
            .default_service(web::to(middleware::not_found))
    })
}
