// Quotation model and its read-boundary defaults.
//
// Documents in the store are loosely structured: any field may be missing.
// `QuotationDocument` mirrors that shape with every field optional, and
// `Quotation::from` applies the defaults once so nothing downstream has to
// re-check for absence.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{AppError, Result};

/// Label reported when a quotation carries no discount type
pub const NOT_AVAILABLE: &str = "N/A";

/// 12-byte document identifier, written as 24 hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuotationId([u8; 12]);

impl QuotationId {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Lowercase hex form used in the store and in responses
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for QuotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for QuotationId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 24 {
            return Err(AppError::invalid_identifier(s));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| AppError::invalid_identifier(s))?;
        Ok(Self(bytes))
    }
}

impl Serialize for QuotationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for QuotationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Quotation lifecycle label. The set is open: unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuotationStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
    Other(String),
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Other(String::new())
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Pending => write!(f, "pending"),
            QuotationStatus::Approved => write!(f, "approved"),
            QuotationStatus::Completed => write!(f, "completed"),
            QuotationStatus::Cancelled => write!(f, "cancelled"),
            QuotationStatus::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for QuotationStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => QuotationStatus::Pending,
            "approved" => QuotationStatus::Approved,
            "completed" => QuotationStatus::Completed,
            "cancelled" => QuotationStatus::Cancelled,
            other => QuotationStatus::Other(other.to_string()),
        }
    }
}

/// Discount applied to a quotation
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    /// Discount kind label, e.g. "percentage" or "fixed"
    pub kind: String,
    /// Meaning depends on `kind`
    pub value: Decimal,
}

impl Default for Discount {
    fn default() -> Self {
        Self {
            kind: NOT_AVAILABLE.to_string(),
            value: Decimal::ZERO,
        }
    }
}

/// Tax amounts charged on a quotation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxes {
    pub iva_amount: Decimal,
    pub service_amount: Decimal,
    pub other_amount: Decimal,
    pub total_taxes: Decimal,
}

/// Quotation with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct Quotation {
    pub id: QuotationId,
    pub subtotal: Decimal,
    pub discount: Discount,
    pub discount_amount: Decimal,
    pub taxes: Taxes,
    pub total_amount: Decimal,
    pub chef_id: Option<String>,
    pub status: QuotationStatus,
    pub created_at: Option<NaiveDateTime>,
}

/// Discount object as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountDocument {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<Decimal>,
}

/// Taxes object as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxesDocument {
    #[serde(default)]
    pub iva_amount: Option<Decimal>,
    #[serde(default)]
    pub service_amount: Option<Decimal>,
    #[serde(default)]
    pub other_amount: Option<Decimal>,
    #[serde(default)]
    pub total_taxes: Option<Decimal>,
}

/// Quotation document exactly as the store hands it over
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDocument {
    #[serde(alias = "_id")]
    pub id: QuotationId,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub discount: Option<DiscountDocument>,
    #[serde(default)]
    pub discount_amount: Option<Decimal>,
    #[serde(default)]
    pub taxes: Option<TaxesDocument>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub chef_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// Reads a creation timestamp as UTC wall-clock time.
///
/// RFC 3339 values (`Z` or a numeric offset) are shifted to UTC. Values
/// without an offset are taken as already being UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid createdAt timestamp: {}", raw))
        }),
    }
}

impl From<DiscountDocument> for Discount {
    fn from(doc: DiscountDocument) -> Self {
        Self {
            kind: doc.kind.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            value: doc.value.unwrap_or_default(),
        }
    }
}

impl From<TaxesDocument> for Taxes {
    fn from(doc: TaxesDocument) -> Self {
        Self {
            iva_amount: doc.iva_amount.unwrap_or_default(),
            service_amount: doc.service_amount.unwrap_or_default(),
            other_amount: doc.other_amount.unwrap_or_default(),
            total_taxes: doc.total_taxes.unwrap_or_default(),
        }
    }
}

impl From<QuotationDocument> for Quotation {
    fn from(doc: QuotationDocument) -> Self {
        Self {
            id: doc.id,
            subtotal: doc.subtotal.unwrap_or_default(),
            discount: doc.discount.map(Discount::from).unwrap_or_default(),
            discount_amount: doc.discount_amount.unwrap_or_default(),
            taxes: doc.taxes.map(Taxes::from).unwrap_or_default(),
            total_amount: doc.total_amount.unwrap_or_default(),
            chef_id: doc.chef_id,
            status: doc
                .status
                .as_deref()
                .map(QuotationStatus::from)
                .unwrap_or_default(),
            created_at: doc.created_at,
        }
    }
}
