/// Seed data for a fresh database
///
/// Provisions the starter layout: "Room 1" with beds 1 and 2, "Room 2"
/// with bed 1. Seeding is skipped when rooms already exist, so the seed
/// binary is safe to re-run against a live database.

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::models::bed::{Bed, CreateBed};
use crate::models::room::{CreateRoom, Room};

/// What the seed run created
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    /// Rooms created, in creation order
    pub rooms: Vec<Room>,

    /// Beds created, in creation order
    pub beds: Vec<Bed>,
}

impl SeedSummary {
    /// Whether the run created anything
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.beds.is_empty()
    }
}

/// Provisions the starter layout into an empty database
///
/// # Returns
///
/// A summary of created records; empty when the database already had
/// rooms and seeding was skipped.
///
/// # Errors
///
/// Returns an error if the database connection fails
pub async fn seed_database(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    if Room::count(pool).await? > 0 {
        warn!("Database already has rooms, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut summary = SeedSummary::default();

    let room1 = Room::create(pool, CreateRoom { name: "Room 1".to_string() }).await?;
    for bed_number in [1, 2] {
        let bed = Bed::create(
            pool,
            CreateBed {
                room_id: room1.id,
                bed_number,
            },
        )
        .await?;
        summary.beds.push(bed);
    }
    summary.rooms.push(room1);

    let room2 = Room::create(pool, CreateRoom { name: "Room 2".to_string() }).await?;
    let bed = Bed::create(
        pool,
        CreateBed {
            room_id: room2.id,
            bed_number: 1,
        },
    )
    .await?;
    summary.beds.push(bed);
    summary.rooms.push(room2);

    info!(
        rooms = summary.rooms.len(),
        beds = summary.beds.len(),
        "Seeded starter layout"
    );

    Ok(summary)
}
