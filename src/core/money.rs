use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Decimal places used for every monetary and percentage figure in a report
pub const REPORT_SCALE: u32 = 2;

/// Rounds a report figure to two decimal places, ties to even
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(REPORT_SCALE, RoundingStrategy::MidpointNearestEven)
}

fn overflow(operation: &str) -> AppError {
    AppError::internal(format!("Amount out of range during {}", operation))
}

pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow("addition"))
}

pub fn checked_sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow("subtraction"))
}

/// Sum of `amounts`, failing instead of overflowing
pub fn sum<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}

/// `numerator / denominator`, or zero when the denominator is not positive
pub fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Result<Decimal> {
    if denominator > Decimal::ZERO {
        numerator
            .checked_div(denominator)
            .ok_or_else(|| overflow("division"))
    } else {
        Ok(Decimal::ZERO)
    }
}

/// `numerator / denominator * 100`, or zero when the denominator is not positive
pub fn percentage(numerator: Decimal, denominator: Decimal) -> Result<Decimal> {
    safe_ratio(numerator, denominator)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| overflow("multiplication"))
}

/// Average of `total` over `count` items, zero for an empty set
pub fn average(total: Decimal, count: i64) -> Result<Decimal> {
    safe_ratio(total, Decimal::from(count))
}
