/// Database models for Lodgebook
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `room`: rooms, the top-level unit of the facility
/// - `bed`: beds within a room, each occupiable by one tenant
/// - `person`: tenants; created only by occupying a bed (see `occupancy`)
/// - `payment`: append-only payment ledger
/// - `electricity_bill`: per-room, per-period electricity bills
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
/// println!("Created room {}", room.id);
/// # Ok(())
/// # }
/// ```

pub mod bed;
pub mod electricity_bill;
pub mod payment;
pub mod person;
pub mod room;
