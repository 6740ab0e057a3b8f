mod memory_repository;
mod quotation_repository;

use std::sync::Arc;

pub use memory_repository::InMemoryQuotationRepository;
pub use quotation_repository::{MySqlQuotationRepository, QuotationRepository};

use crate::config::{DatabaseConfig, StoreBackend};
use crate::core::Result;

/// Open the quotation store selected by configuration
pub async fn open(config: &DatabaseConfig) -> Result<Arc<dyn QuotationRepository>> {
    match config.backend {
        StoreBackend::Mysql => {
            let pool = config.create_pool().await?;
            tracing::info!(
                max_connections = config.max_connections,
                "MySQL quotation store connected"
            );
            Ok(Arc::new(MySqlQuotationRepository::new(pool)))
        }
        StoreBackend::Memory => {
            let repository = match &config.seed_path {
                Some(path) => InMemoryQuotationRepository::from_seed_file(path).await?,
                None => {
                    tracing::warn!("No QUOTATIONS_SEED_PATH set, starting with an empty store");
                    InMemoryQuotationRepository::default()
                }
            };
            Ok(Arc::new(repository))
        }
    }
}
