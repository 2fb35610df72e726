/// Per-tenant due computation
///
/// The due for a tenant is
///
/// ```text
/// due = round(base_rent + electricity_share - payments, 2)
/// ```
///
/// where the electricity share only applies when a billing period is
/// requested, and the payment sum is scoped to that period when given.
/// The computation is a deterministic, side-effect-free read; an absent
/// tenant yields `Ok(None)` rather than an error.
///
/// Two behaviors are kept exactly as the books have always been kept, even
/// though both have sharp edges:
///
/// - An evenly-split bill divides by the number of *currently* occupied
///   beds, not the occupancy when the bill was incurred.
/// - A bill with `split_evenly` off charges its full amount to every
///   tenant of the room individually.
///
/// # Example
///
/// ```no_run
/// use lodgebook_shared::billing::compute_due;
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// if let Some(statement) = compute_due(&pool, 1, Some("2025-06")).await? {
///     println!("{} owes {}", statement.person.name, statement.due);
/// }
/// # Ok(())
/// # }
/// ```

use serde::Serialize;
use sqlx::SqlitePool;

use crate::models::bed::Bed;
use crate::models::electricity_bill::ElectricityBill;
use crate::models::payment::Payment;
use crate::models::person::Person;

/// The result of a due computation
#[derive(Debug, Clone, Serialize)]
pub struct DueStatement {
    /// Flat base rent for the period
    pub rent: f64,

    /// The tenant's share of the room's electricity bill (0 when no
    /// period was requested or no bill exists for it)
    pub eb_share: f64,

    /// Sum of recorded payments, scoped to the period when one was given
    pub paid: f64,

    /// rent + eb_share - paid, rounded to two decimals; negative means
    /// the tenant is in credit
    pub due: f64,

    /// The tenant the statement is for
    pub person: Person,
}

/// Computes the due statement for a tenant, optionally scoped to a
/// billing period
///
/// # Returns
///
/// `Ok(None)` when the tenant does not exist.
///
/// # Errors
///
/// Returns an error only on database failure; a missing bill or an empty
/// payment ledger are ordinary zero contributions.
pub async fn compute_due(
    pool: &SqlitePool,
    person_id: i64,
    period: Option<&str>,
) -> Result<Option<DueStatement>, sqlx::Error> {
    let Some(person) = Person::find_by_id(pool, person_id).await? else {
        return Ok(None);
    };

    let rent = person.base_rent;

    let mut eb_share = 0.0;
    if let Some(period) = period {
        if let Some(bill) = ElectricityBill::find_for_room_period(pool, person.room_id, period).await? {
            if bill.split_evenly {
                let occupied = Bed::count_occupied(pool, person.room_id).await?;
                eb_share = bill.total_amount / occupied.max(1) as f64;
            } else {
                eb_share = bill.total_amount;
            }
        }
    }

    let paid = Payment::total_for_person(pool, person_id, period).await?;

    let due = round_to_cents(rent + eb_share - paid);

    Ok(Some(DueStatement {
        rent,
        eb_share,
        paid,
        due,
        person,
    }))
}

/// Rounds a monetary amount to two decimal places
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1150.0), 1150.0);
        assert_eq!(round_to_cents(1234.567), 1234.57);
        assert_eq!(round_to_cents(99.994999), 99.99);
        assert_eq!(round_to_cents(-50.555), -50.55);
    }

    #[test]
    fn test_round_to_cents_thirds() {
        // 300 / 3 occupants does not round away
        assert_eq!(round_to_cents(100.0), 100.0);
        // 100 / 3 keeps two decimals
        assert_eq!(round_to_cents(100.0 / 3.0), 33.33);
    }
}
