/// Person (tenant) model and database operations
///
/// A person is created only by occupying a vacant bed: see
/// `occupancy::occupy_bed`, which inserts the row inside the same
/// transaction that claims the bed. There is no standalone create here,
/// and no delete or move operations exist.
///
/// Invariant: a person's bed belongs to the person's room, and the bed's
/// vacancy flag is false while occupied. The occupy-bed transaction copies
/// `room_id` from the bed row, so the invariant holds by construction.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE people (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL,
///     id_proof TEXT,
///     room_id INTEGER NOT NULL REFERENCES rooms(id),
///     bed_id INTEGER NOT NULL REFERENCES beds(id),
///     base_rent REAL NOT NULL DEFAULT 0
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Person (tenant) model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    /// Unique person ID
    pub id: i64,

    /// Tenant name
    pub name: String,

    /// Identity document reference, if one was recorded
    pub id_proof: Option<String>,

    /// Room the tenant lives in
    pub room_id: i64,

    /// Bed the tenant occupies
    pub bed_id: i64,

    /// Flat rent per billing period
    pub base_rent: f64,
}

impl Person {
    /// Finds a person by ID
    ///
    /// # Returns
    ///
    /// The person if found, None otherwise
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, id_proof, room_id, bed_id, base_rent
            FROM people
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(person)
    }

    /// Lists all tenants, ordered by creation
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let people = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, id_proof, room_id, bed_id, base_rent
            FROM people
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(people)
    }
}
