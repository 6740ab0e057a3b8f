use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::core::money::checked_add;
use crate::core::{AppError, DateRange, Result};
use crate::modules::quotations::models::{
    ChefGroup, Quotation, QuotationDocument, QuotationId, QuotationStatus,
};
use crate::modules::quotations::repositories::QuotationRepository;

/// Quotation store held entirely in memory.
///
/// Backs the `memory` store backend and the test suite. Contents never change
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuotationRepository {
    quotations: Vec<Quotation>,
}

impl InMemoryQuotationRepository {
    pub fn new(quotations: Vec<Quotation>) -> Self {
        Self { quotations }
    }

    pub fn from_documents(documents: Vec<QuotationDocument>) -> Self {
        Self::new(documents.into_iter().map(Quotation::from).collect())
    }

    /// Load a JSON array of quotation documents
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<QuotationDocument> = serde_json::from_str(json)?;
        Ok(Self::from_documents(documents))
    }

    /// Load a seed file containing a JSON array of quotation documents
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read quotation seed file {}: {}",
                path.display(),
                e
            ))
        })?;
        let repository = Self::from_json(&json)?;

        tracing::info!(
            path = %path.display(),
            quotations = repository.len(),
            "Loaded in-memory quotation store"
        );

        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.quotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotations.is_empty()
    }
}

#[async_trait]
impl QuotationRepository for InMemoryQuotationRepository {
    async fn find_all(&self) -> Result<Vec<Quotation>> {
        Ok(self.quotations.clone())
    }

    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>> {
        Ok(self.quotations.iter().find(|q| &q.id == id).cloned())
    }

    async fn group_by_chef_with_status_counts(&self) -> Result<Vec<ChefGroup>> {
        let mut groups: HashMap<&str, ChefGroup> = HashMap::new();

        for quotation in &self.quotations {
            let Some(chef_id) = quotation.chef_id.as_deref() else {
                continue;
            };
            let group = groups
                .entry(chef_id)
                .or_insert_with(|| ChefGroup::new(chef_id));

            group.total_quotations += 1;
            group.total_revenue = checked_add(group.total_revenue, quotation.total_amount)?;
            match quotation.status {
                QuotationStatus::Approved => group.approved_quotations += 1,
                QuotationStatus::Pending => group.pending_quotations += 1,
                QuotationStatus::Cancelled => group.cancelled_quotations += 1,
                QuotationStatus::Completed => group.completed_quotations += 1,
                QuotationStatus::Other(_) => {}
            }
        }

        let mut groups: Vec<ChefGroup> = groups.into_values().collect();
        groups.sort_by(|a, b| {
            b.total_revenue
                .cmp(&a.total_revenue)
                .then_with(|| a.chef_id.cmp(&b.chef_id))
        });

        Ok(groups)
    }

    async fn find_by_date_range(&self, range: &DateRange) -> Result<Vec<Quotation>> {
        Ok(self
            .quotations
            .iter()
            .filter(|q| range.contains(q.created_at))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
