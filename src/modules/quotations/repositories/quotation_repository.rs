use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{AppError, DateRange, Result};
use crate::modules::quotations::models::{
    ChefGroup, DiscountDocument, Quotation, QuotationDocument, QuotationId, TaxesDocument,
};

/// Read access to stored quotations.
///
/// Grouping is delegated to the store so the analytics engine stays
/// independent of any query language.
#[async_trait]
pub trait QuotationRepository: Send + Sync {
    /// Every stored quotation
    async fn find_all(&self) -> Result<Vec<Quotation>>;

    /// Single quotation by id
    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>>;

    /// Quotations with a chef, grouped per chef with status counters,
    /// highest revenue first
    async fn group_by_chef_with_status_counts(&self) -> Result<Vec<ChefGroup>>;

    /// Quotations whose `createdAt` lies in `range`
    async fn find_by_date_range(&self, range: &DateRange) -> Result<Vec<Quotation>>;

    /// Cheap connectivity check used by the readiness probe
    async fn ping(&self) -> Result<()>;

    /// Release store resources at shutdown
    async fn close(&self) {}
}

const SELECT_QUOTATION: &str = r#"
    SELECT
        id, subtotal, discount_type, discount_value, discount_amount,
        iva_amount, service_amount, other_amount, total_taxes,
        total_amount, chef_id, status, created_at
    FROM quotations
"#;

/// MySQL-backed quotation store
pub struct MySqlQuotationRepository {
    pool: MySqlPool,
}

impl MySqlQuotationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuotationRepository for MySqlQuotationRepository {
    async fn find_all(&self) -> Result<Vec<Quotation>> {
        let rows = sqlx::query_as::<_, QuotationRow>(SELECT_QUOTATION)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Quotation::try_from).collect()
    }

    async fn find_by_id(&self, id: &QuotationId) -> Result<Option<Quotation>> {
        let sql = format!("{} WHERE id = ?", SELECT_QUOTATION);
        let row = sqlx::query_as::<_, QuotationRow>(&sql)
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Quotation::try_from).transpose()
    }

    async fn group_by_chef_with_status_counts(&self) -> Result<Vec<ChefGroup>> {
        let rows = sqlx::query_as::<_, ChefGroupRow>(
            r#"
            SELECT
                chef_id,
                COUNT(*) AS total_quotations,
                COALESCE(SUM(total_amount), 0) AS total_revenue,
                CAST(COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0) AS SIGNED) AS approved_quotations,
                CAST(COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS SIGNED) AS pending_quotations,
                CAST(COALESCE(SUM(CASE WHEN status = 'cancelled' THEN 1 ELSE 0 END), 0) AS SIGNED) AS cancelled_quotations,
                CAST(COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) AS SIGNED) AS completed_quotations
            FROM quotations
            WHERE chef_id IS NOT NULL
            GROUP BY chef_id
            ORDER BY total_revenue DESC, chef_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ChefGroup::from).collect())
    }

    async fn find_by_date_range(&self, range: &DateRange) -> Result<Vec<Quotation>> {
        let mut query = sqlx::QueryBuilder::<sqlx::MySql>::new(SELECT_QUOTATION);
        let mut clause = " WHERE ";
        if let Some(start) = range.start {
            query.push(clause).push("created_at >= ").push_bind(start);
            clause = " AND ";
        }
        if let Some(end) = range.end {
            query.push(clause).push("created_at <= ").push_bind(end);
        }

        let rows = query
            .build_query_as::<QuotationRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Quotation::try_from).collect()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Database row representation for the quotations table
#[derive(sqlx::FromRow)]
struct QuotationRow {
    id: String,
    subtotal: Option<Decimal>,
    discount_type: Option<String>,
    discount_value: Option<Decimal>,
    discount_amount: Option<Decimal>,
    iva_amount: Option<Decimal>,
    service_amount: Option<Decimal>,
    other_amount: Option<Decimal>,
    total_taxes: Option<Decimal>,
    total_amount: Option<Decimal>,
    chef_id: Option<String>,
    status: Option<String>,
    created_at: Option<NaiveDateTime>,
}

impl TryFrom<QuotationRow> for Quotation {
    type Error = AppError;

    fn try_from(row: QuotationRow) -> Result<Self> {
        let id = row
            .id
            .parse::<QuotationId>()
            .map_err(|_| AppError::internal(format!("Stored quotation has malformed id: {}", row.id)))?;

        let discount = (row.discount_type.is_some() || row.discount_value.is_some()).then(|| {
            DiscountDocument {
                kind: row.discount_type,
                value: row.discount_value,
            }
        });

        let taxes = TaxesDocument {
            iva_amount: row.iva_amount,
            service_amount: row.service_amount,
            other_amount: row.other_amount,
            total_taxes: row.total_taxes,
        };

        Ok(Quotation::from(QuotationDocument {
            id,
            subtotal: row.subtotal,
            discount,
            discount_amount: row.discount_amount,
            taxes: Some(taxes),
            total_amount: row.total_amount,
            chef_id: row.chef_id,
            status: row.status,
            created_at: row.created_at,
        }))
    }
}

/// Aggregate row produced by the chef grouping query
#[derive(sqlx::FromRow)]
struct ChefGroupRow {
    chef_id: String,
    total_quotations: i64,
    total_revenue: Decimal,
    approved_quotations: i64,
    pending_quotations: i64,
    cancelled_quotations: i64,
    completed_quotations: i64,
}

impl From<ChefGroupRow> for ChefGroup {
    fn from(row: ChefGroupRow) -> Self {
        Self {
            chef_id: row.chef_id,
            total_quotations: row.total_quotations,
            total_revenue: row.total_revenue,
            approved_quotations: row.approved_quotations,
            pending_quotations: row.pending_quotations,
            cancelled_quotations: row.cancelled_quotations,
            completed_quotations: row.completed_quotations,
        }
    }
}
