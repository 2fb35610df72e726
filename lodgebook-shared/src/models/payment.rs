/// Payment model and database operations
///
/// Payments are an append-only ledger: rows are inserted once and never
/// updated or deleted. A payment optionally carries a billing-period label
/// ("YYYY-MM"); the due computation matches the label exactly when a
/// period is requested, and sums the whole ledger otherwise.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE payments (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     person_id INTEGER NOT NULL REFERENCES people(id),
///     amount REAL NOT NULL,
///     paid_at TEXT NOT NULL,
///     period TEXT
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use lodgebook_shared::models::payment::{CreatePayment, Payment};
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let payment = Payment::create(
///     &pool,
///     CreatePayment {
///         person_id: 1,
///         amount: 1150.0,
///         period: Some("2025-06".to_string()),
///     },
/// )
/// .await?;
///
/// println!("Recorded payment {} of {}", payment.id, payment.amount);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Payment model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    /// Unique payment ID
    pub id: i64,

    /// Tenant the payment belongs to
    pub person_id: i64,

    /// Amount paid
    pub amount: f64,

    /// When the payment was recorded (UTC)
    pub paid_at: DateTime<Utc>,

    /// Billing-period label (e.g. "2025-06"), if the payment was scoped
    pub period: Option<String>,
}

/// Input for recording a new payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    /// Tenant the payment belongs to
    pub person_id: i64,

    /// Amount paid
    pub amount: f64,

    /// Optional billing-period label
    pub period: Option<String>,
}

impl Payment {
    /// Records a new payment
    ///
    /// The timestamp is set to the current UTC time on insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &SqlitePool, data: CreatePayment) -> Result<Self, sqlx::Error> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (person_id, amount, paid_at, period)
            VALUES (?, ?, ?, ?)
            RETURNING id, person_id, amount, paid_at, period
            "#,
        )
        .bind(data.person_id)
        .bind(data.amount)
        .bind(Utc::now())
        .bind(data.period)
        .fetch_one(pool)
        .await?;

        Ok(payment)
    }

    /// Lists payments for a tenant, ordered by timestamp
    ///
    /// When `period` is given, only payments carrying that exact label are
    /// returned.
    pub async fn list_for_person(
        pool: &SqlitePool,
        person_id: i64,
        period: Option<&str>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let payments = match period {
            Some(period) => {
                sqlx::query_as::<_, Payment>(
                    r#"
                    SELECT id, person_id, amount, paid_at, period
                    FROM payments
                    WHERE person_id = ? AND period = ?
                    ORDER BY paid_at, id
                    "#,
                )
                .bind(person_id)
                .bind(period)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Payment>(
                    r#"
                    SELECT id, person_id, amount, paid_at, period
                    FROM payments
                    WHERE person_id = ?
                    ORDER BY paid_at, id
                    "#,
                )
                .bind(person_id)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(payments)
    }

    /// Sums payment amounts for a tenant
    ///
    /// When `period` is given, only payments carrying that exact label
    /// count; otherwise every payment the tenant ever made counts.
    pub async fn total_for_person(
        pool: &SqlitePool,
        person_id: i64,
        period: Option<&str>,
    ) -> Result<f64, sqlx::Error> {
        let (total,): (f64,) = match period {
            Some(period) => {
                sqlx::query_as(
                    "SELECT COALESCE(SUM(amount), 0.0) FROM payments WHERE person_id = ? AND period = ?",
                )
                .bind(person_id)
                .bind(period)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COALESCE(SUM(amount), 0.0) FROM payments WHERE person_id = ?")
                    .bind(person_id)
                    .fetch_one(pool)
                    .await?
            }
        };

        Ok(total)
    }
}
