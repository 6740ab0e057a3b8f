use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quotation::NOT_AVAILABLE;

/// Revenue totals across every stored quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalysis {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_quotation_value: Decimal,
    pub total_quotations: i64,
}

/// Discount impact on a single quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountAnalysis {
    pub quotation_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_subtotal: Decimal,
    pub discount_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_without_discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub savings_for_client: Decimal,
    /// Same ratio as `discount_percentage`; kept under this name for existing consumers
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_margin_lost: Decimal,
}

/// Per-chef aggregate computed by the store.
///
/// Quotations whose status is none of the four known labels count toward
/// `total_quotations` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefGroup {
    pub chef_id: String,
    pub total_quotations: i64,
    pub total_revenue: Decimal,
    pub approved_quotations: i64,
    pub pending_quotations: i64,
    pub cancelled_quotations: i64,
    pub completed_quotations: i64,
}

impl ChefGroup {
    pub fn new(chef_id: impl Into<String>) -> Self {
        Self {
            chef_id: chef_id.into(),
            total_quotations: 0,
            total_revenue: Decimal::ZERO,
            approved_quotations: 0,
            pending_quotations: 0,
            cancelled_quotations: 0,
            completed_quotations: 0,
        }
    }
}

/// Performance figures for one chef
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefProfitability {
    pub chef_id: String,
    pub total_quotations: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_quotation_value: Decimal,
    pub approved_quotations: i64,
    pub pending_quotations: i64,
    pub cancelled_quotations: i64,
    pub completed_quotations: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub success_rate: Decimal,
}

/// Requested reporting window, echoed verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub start_date: String,
    pub end_date: String,
}

impl ReportPeriod {
    /// Missing or empty bounds are reported as "N/A"
    pub fn new(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start_date: echo_or_not_available(start_date),
            end_date: echo_or_not_available(end_date),
        }
    }
}

fn echo_or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Summed tax categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub iva_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub service_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub other_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_taxes: Decimal,
}

/// Tax summary over an optionally bounded period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub period: ReportPeriod,
    pub total_quotations: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_discounts: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub tax_breakdown: TaxBreakdown,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_revenue: Decimal,
}
