use actix_web::{web, App, HttpServer};
use anyhow::Context;
use quotation_analytics::config::Config;
use quotation_analytics::middleware::{self, ErrorHandler, RequestId};
use quotation_analytics::modules;
use quotation_analytics::quotations::{repositories, QuotationAnalyticsService, QuotationRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "quotation_analytics={},actix_web=info",
            config.app.log_level
        )
        .into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Quotation Analytics API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Store backend: {:?}", config.database.backend);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repository = repositories::open(&config.database)
        .await
        .context("Failed to open quotation store")?;

    let service = web::Data::new(QuotationAnalyticsService::new(repository.clone()));
    let app_config = web::Data::new(config.app.clone());
    let allowed_origin = config.cors.allowed_origin.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let allowed_origin = allowed_origin.clone();
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .app_data(service.clone())
            .app_data(app_config.clone())
            .configure(|cfg| modules::configure(cfg, &allowed_origin))
            .default_service(web::to(middleware::not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    let result = server.await;

    tracing::info!("Server stopped, closing quotation store");
    repository.close().await;

    result.context("HTTP server error")
}
