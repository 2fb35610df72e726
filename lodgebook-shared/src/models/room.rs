/// Room model and database operations
///
/// Rooms are the top-level unit of the facility. A room owns a set of beds
/// and a set of electricity bills (one per billing period by convention).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE rooms (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use lodgebook_shared::models::room::{CreateRoom, Room};
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let room = Room::create(&pool, CreateRoom { name: "Room 1".to_string() }).await?;
///
/// if let Some(found) = Room::find_by_id(&pool, room.id).await? {
///     println!("Found room: {}", found.name);
/// }
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Room model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    /// Unique room ID
    pub id: i64,

    /// Display name (e.g. "Room 1")
    pub name: String,
}

/// Input for creating a new room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Display name
    pub name: String,
}

impl Room {
    /// Creates a new room in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateRoom) -> Result<Self, sqlx::Error> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(room)
    }

    /// Finds a room by ID
    ///
    /// # Returns
    ///
    /// The room if found, None otherwise
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name
            FROM rooms
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(room)
    }

    /// Lists all rooms, ordered by creation
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name
            FROM rooms
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rooms)
    }

    /// Counts total number of rooms
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rooms")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
