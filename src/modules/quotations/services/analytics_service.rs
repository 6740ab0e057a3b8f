use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{AppError, DateRange, Result};
use crate::modules::quotations::models::{
    ChefProfitability, DiscountAnalysis, QuotationId, ReportPeriod, RevenueAnalysis, TaxSummary,
};
use crate::modules::quotations::repositories::QuotationRepository;
use crate::modules::quotations::services::AnalyticsEngine;

/// Answers the quotation report queries.
///
/// Validates request parameters, pulls records from the injected repository
/// and hands them to the [`AnalyticsEngine`]. Holds no mutable state.
#[derive(Clone)]
pub struct QuotationAnalyticsService {
    repository: Arc<dyn QuotationRepository>,
    engine: AnalyticsEngine,
}

impl QuotationAnalyticsService {
    pub fn new(repository: Arc<dyn QuotationRepository>) -> Self {
        Self {
            repository,
            engine: AnalyticsEngine::new(),
        }
    }

    pub fn repository(&self) -> &Arc<dyn QuotationRepository> {
        &self.repository
    }

    /// Revenue totals over every stored quotation
    pub async fn revenue_analysis(&self) -> Result<RevenueAnalysis> {
        let quotations = self.repository.find_all().await?;
        debug!(quotations = quotations.len(), "Computing revenue analysis");

        self.engine.revenue_analysis(&quotations)
    }

    /// Discount impact for the quotation with the given raw path id
    ///
    /// # Errors
    /// `InvalidIdentifier` when `raw_id` is not 24 hex characters,
    /// `NotFound` when nothing is stored under it.
    pub async fn discount_analysis(&self, raw_id: &str) -> Result<DiscountAnalysis> {
        let id: QuotationId = raw_id.parse()?;

        let quotation = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(raw_id))?;

        self.engine.discount_analysis(&quotation)
    }

    /// Per-chef figures, highest revenue first
    pub async fn profitability_by_chef(&self) -> Result<Vec<ChefProfitability>> {
        let groups = self.repository.group_by_chef_with_status_counts().await?;
        debug!(chefs = groups.len(), "Computing profitability by chef");

        self.engine.profitability_by_chef(groups)
    }

    /// Tax totals over quotations created inside the optional date window.
    ///
    /// Both dates are `YYYY-MM-DD`; empty values count as absent.
    pub async fn tax_summary(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<TaxSummary> {
        let range = DateRange::parse(start_date, end_date)?;

        info!(
            start = ?range.start,
            end = ?range.end,
            "Generating tax summary"
        );

        let quotations = if range.is_unbounded() {
            self.repository.find_all().await?
        } else {
            self.repository.find_by_date_range(&range).await?
        };

        let period = ReportPeriod::new(start_date, end_date);
        self.engine.tax_summary(&quotations, period)
    }

    /// Store connectivity for the readiness probe
    pub async fn check_store(&self) -> Result<()> {
        self.repository.ping().await
    }
}
