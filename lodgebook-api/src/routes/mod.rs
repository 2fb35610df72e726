/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `rooms`: Rooms, beds, and electricity bills
/// - `people`: Tenants, due statements, and payments

use crate::error::ApiError;

pub mod health;
pub mod people;
pub mod rooms;

/// Checks a billing-period label for the "YYYY-MM" shape
///
/// Periods scope payments and bills by exact string match, so a malformed
/// label would silently never match anything; reject it up front.
pub(crate) fn ensure_valid_period(period: &str) -> Result<(), ApiError> {
    let bytes = period.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5..].iter().all(|b| b.is_ascii_digit());

    let month_ok = well_formed
        && matches!(period[5..].parse::<u8>(), Ok(month) if (1..=12).contains(&month));

    if month_ok {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Invalid billing period '{}', expected YYYY-MM",
            period
        )))
    }
}
