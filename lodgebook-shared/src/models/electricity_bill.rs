/// Electricity bill model and database operations
///
/// Each bill covers one room for one billing period ("YYYY-MM"). Bills are
/// inserted once and never mutated. Nothing prevents two uploads for the
/// same (room, period); the lookup tie-breaks on newest `uploaded_at`
/// (then highest id) so the winner is deterministic.
///
/// The `split_evenly` flag controls how the due computation attributes the
/// bill: split across currently occupied beds when true, the full amount
/// to each tenant queried when false (see `billing::compute_due`).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE electricity_bills (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     room_id INTEGER NOT NULL REFERENCES rooms(id),
///     period TEXT NOT NULL,
///     total_amount REAL NOT NULL,
///     split_evenly INTEGER NOT NULL DEFAULT 1,
///     uploaded_at TEXT NOT NULL
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Electricity bill model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ElectricityBill {
    /// Unique bill ID
    pub id: i64,

    /// Room the bill covers
    pub room_id: i64,

    /// Billing-period label (e.g. "2025-06")
    pub period: String,

    /// Total billed amount for the room
    pub total_amount: f64,

    /// Whether the amount is split across occupied beds
    pub split_evenly: bool,

    /// When the bill was uploaded (UTC)
    pub uploaded_at: DateTime<Utc>,
}

/// Input for uploading a new electricity bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateElectricityBill {
    /// Room the bill covers
    pub room_id: i64,

    /// Billing-period label
    pub period: String,

    /// Total billed amount
    pub total_amount: f64,

    /// Whether the amount is split across occupied beds
    pub split_evenly: bool,
}

impl ElectricityBill {
    /// Uploads a new electricity bill
    ///
    /// The upload timestamp is set to the current UTC time on insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(
        pool: &SqlitePool,
        data: CreateElectricityBill,
    ) -> Result<Self, sqlx::Error> {
        let bill = sqlx::query_as::<_, ElectricityBill>(
            r#"
            INSERT INTO electricity_bills (room_id, period, total_amount, split_evenly, uploaded_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, room_id, period, total_amount, split_evenly, uploaded_at
            "#,
        )
        .bind(data.room_id)
        .bind(data.period)
        .bind(data.total_amount)
        .bind(data.split_evenly)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(bill)
    }

    /// Finds the bill for a (room, period) pair
    ///
    /// At most one row is returned. If duplicate uploads exist, the newest
    /// `uploaded_at` wins (then the highest id).
    pub async fn find_for_room_period(
        pool: &SqlitePool,
        room_id: i64,
        period: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let bill = sqlx::query_as::<_, ElectricityBill>(
            r#"
            SELECT id, room_id, period, total_amount, split_evenly, uploaded_at
            FROM electricity_bills
            WHERE room_id = ? AND period = ?
            ORDER BY uploaded_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(room_id)
        .bind(period)
        .fetch_optional(pool)
        .await?;

        Ok(bill)
    }

    /// Lists all bills for a room, ordered by period
    pub async fn list_by_room(pool: &SqlitePool, room_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let bills = sqlx::query_as::<_, ElectricityBill>(
            r#"
            SELECT id, room_id, period, total_amount, split_evenly, uploaded_at
            FROM electricity_bills
            WHERE room_id = ?
            ORDER BY period, uploaded_at
            "#,
        )
        .bind(room_id)
        .fetch_all(pool)
        .await?;

        Ok(bills)
    }
}
