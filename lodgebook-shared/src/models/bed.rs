/// Bed model and database operations
///
/// Beds belong to a room and hold at most one tenant at a time. The
/// `vacant` flag is flipped to false by the occupy-bed transaction (see
/// the `occupancy` module) and is never flipped back: there are no
/// move-out operations.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE beds (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     room_id INTEGER NOT NULL REFERENCES rooms(id),
///     bed_number INTEGER NOT NULL,
///     vacant INTEGER NOT NULL DEFAULT 1
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Bed model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bed {
    /// Unique bed ID
    pub id: i64,

    /// Room this bed belongs to
    pub room_id: i64,

    /// Position within the room (1, 2, 3, ...)
    pub bed_number: i64,

    /// Whether the bed currently has no occupant
    pub vacant: bool,
}

/// Input for creating a new bed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBed {
    /// Room the bed belongs to
    pub room_id: i64,

    /// Position within the room
    pub bed_number: i64,
}

impl Bed {
    /// Creates a new, vacant bed in a room
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateBed) -> Result<Self, sqlx::Error> {
        let bed = sqlx::query_as::<_, Bed>(
            r#"
            INSERT INTO beds (room_id, bed_number, vacant)
            VALUES (?, ?, 1)
            RETURNING id, room_id, bed_number, vacant
            "#,
        )
        .bind(data.room_id)
        .bind(data.bed_number)
        .fetch_one(pool)
        .await?;

        Ok(bed)
    }

    /// Finds a bed by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let bed = sqlx::query_as::<_, Bed>(
            r#"
            SELECT id, room_id, bed_number, vacant
            FROM beds
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(bed)
    }

    /// Lists all beds in a room, ordered by bed number
    pub async fn list_by_room(pool: &SqlitePool, room_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let beds = sqlx::query_as::<_, Bed>(
            r#"
            SELECT id, room_id, bed_number, vacant
            FROM beds
            WHERE room_id = ?
            ORDER BY bed_number
            "#,
        )
        .bind(room_id)
        .fetch_all(pool)
        .await?;

        Ok(beds)
    }

    /// Counts currently occupied (non-vacant) beds in a room
    ///
    /// This is the divisor for evenly-split electricity bills. It reflects
    /// occupancy at query time, not at the time a bill was incurred.
    pub async fn count_occupied(pool: &SqlitePool, room_id: i64) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM beds WHERE room_id = ? AND vacant = 0")
                .bind(room_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
