pub mod analysis;
pub mod quotation;

pub use analysis::{
    ChefGroup, ChefProfitability, DiscountAnalysis, ReportPeriod, RevenueAnalysis, TaxBreakdown,
    TaxSummary,
};
pub use quotation::{
    Discount, DiscountDocument, Quotation, QuotationDocument, QuotationId, QuotationStatus, Taxes,
    TaxesDocument, NOT_AVAILABLE,
};
