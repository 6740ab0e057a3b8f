use rust_decimal::Decimal;

use crate::core::money::{average, checked_add, checked_sub, percentage, round2, sum};
use crate::core::Result;
use crate::modules::quotations::models::{
    ChefGroup, ChefProfitability, DiscountAnalysis, Quotation, ReportPeriod, RevenueAnalysis,
    TaxBreakdown, TaxSummary,
};

/// Stateless calculator turning quotation records into report figures.
///
/// Every ratio is taken from unrounded sums; each output field is then rounded
/// to two places independently. A non-positive denominator yields zero.
/// Amounts too large for `Decimal` fail with `AppError::Internal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Total and average revenue over `quotations`
    pub fn revenue_analysis(&self, quotations: &[Quotation]) -> Result<RevenueAnalysis> {
        let total_quotations = quotations.len() as i64;
        let total_revenue = sum(quotations.iter().map(|q| q.total_amount))?;

        Ok(RevenueAnalysis {
            total_revenue: round2(total_revenue),
            average_quotation_value: round2(average(total_revenue, total_quotations)?),
            total_quotations,
        })
    }

    /// Discount impact on a single quotation
    pub fn discount_analysis(&self, quotation: &Quotation) -> Result<DiscountAnalysis> {
        let discount_percentage = percentage(quotation.discount_amount, quotation.subtotal)?;
        let total_without_discount =
            checked_add(quotation.subtotal, quotation.taxes.total_taxes)?;

        Ok(DiscountAnalysis {
            quotation_id: quotation.id.to_hex(),
            original_subtotal: round2(quotation.subtotal),
            discount_type: quotation.discount.kind.clone(),
            discount_value: round2(quotation.discount.value),
            discount_amount: round2(quotation.discount_amount),
            discount_percentage: round2(discount_percentage),
            total_without_discount: round2(total_without_discount),
            final_total: round2(quotation.total_amount),
            savings_for_client: round2(quotation.discount_amount),
            profit_margin_lost: round2(discount_percentage),
        })
    }

    /// Derive per-chef figures from store-computed groups.
    ///
    /// Output is ordered by revenue, highest first, then by chef id.
    pub fn profitability_by_chef(
        &self,
        mut groups: Vec<ChefGroup>,
    ) -> Result<Vec<ChefProfitability>> {
        groups.sort_by(|a, b| {
            b.total_revenue
                .cmp(&a.total_revenue)
                .then_with(|| a.chef_id.cmp(&b.chef_id))
        });

        groups
            .into_iter()
            .map(|group| {
                let approved = Decimal::from(group.approved_quotations);
                let count = Decimal::from(group.total_quotations);

                Ok(ChefProfitability {
                    average_quotation_value: round2(average(
                        group.total_revenue,
                        group.total_quotations,
                    )?),
                    success_rate: round2(percentage(approved, count)?),
                    total_revenue: round2(group.total_revenue),
                    chef_id: group.chef_id,
                    total_quotations: group.total_quotations,
                    approved_quotations: group.approved_quotations,
                    pending_quotations: group.pending_quotations,
                    cancelled_quotations: group.cancelled_quotations,
                    completed_quotations: group.completed_quotations,
                })
            })
            .collect()
    }

    /// Tax totals over quotations already filtered to `period`
    pub fn tax_summary(
        &self,
        quotations: &[Quotation],
        period: ReportPeriod,
    ) -> Result<TaxSummary> {
        let total_subtotal = sum(quotations.iter().map(|q| q.subtotal))?;
        let total_discounts = sum(quotations.iter().map(|q| q.discount_amount))?;
        let total_revenue = sum(quotations.iter().map(|q| q.total_amount))?;
        let iva = sum(quotations.iter().map(|q| q.taxes.iva_amount))?;
        let service = sum(quotations.iter().map(|q| q.taxes.service_amount))?;
        let other = sum(quotations.iter().map(|q| q.taxes.other_amount))?;
        let total_taxes = sum(quotations.iter().map(|q| q.taxes.total_taxes))?;

        Ok(TaxSummary {
            period,
            total_quotations: quotations.len() as i64,
            total_subtotal: round2(total_subtotal),
            total_discounts: round2(total_discounts),
            total_revenue: round2(total_revenue),
            tax_breakdown: TaxBreakdown {
                iva_amount: round2(iva),
                service_amount: round2(service),
                other_amount: round2(other),
                total_taxes: round2(total_taxes),
            },
            average_tax_rate: round2(percentage(total_taxes, total_subtotal)?),
            net_revenue: round2(checked_sub(total_revenue, total_taxes)?),
        })
    }
}
