/// The occupy-bed transaction
///
/// Occupying a bed is the only multi-statement write in the system: the
/// bed's vacancy flag is flipped and the tenant row is inserted in one
/// transaction, so a failure at any point leaves no partial state. The
/// flip is guarded (`WHERE vacant = 1`), which makes two concurrent
/// requests for the same bed race cleanly: exactly one wins, the other
/// gets `BedOccupied`.
///
/// The tenant's `room_id` is copied from the bed row, never taken from the
/// caller, so a person's bed always belongs to the person's room.
///
/// # Example
///
/// ```no_run
/// use lodgebook_shared::occupancy::{occupy_bed, NewOccupancy};
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let person = occupy_bed(
///     &pool,
///     NewOccupancy {
///         bed_id: 1,
///         name: "Asha".to_string(),
///         id_proof: None,
///         base_rent: 1000.0,
///     },
/// )
/// .await?;
///
/// println!("{} moved into bed {}", person.name, person.bed_id);
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::info;

use crate::models::bed::Bed;
use crate::models::person::Person;

/// Error type for the occupy-bed operation
#[derive(Debug, thiserror::Error)]
pub enum OccupancyError {
    /// The requested bed does not exist
    #[error("Bed {0} does not exist")]
    InvalidBed(i64),

    /// The requested bed already has an occupant
    #[error("Bed {0} is already occupied")]
    BedOccupied(i64),

    /// Transport failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Input for occupying a bed
#[derive(Debug, Clone)]
pub struct NewOccupancy {
    /// The bed to occupy
    pub bed_id: i64,

    /// Tenant name
    pub name: String,

    /// Identity document reference, if recorded
    pub id_proof: Option<String>,

    /// Flat rent per billing period
    pub base_rent: f64,
}

/// Occupies a bed, creating the tenant
///
/// Flips the bed's vacancy flag and inserts the person record atomically.
///
/// # Errors
///
/// - [`OccupancyError::InvalidBed`] when the bed id is not in the store
/// - [`OccupancyError::BedOccupied`] when the bed already has an occupant
/// - [`OccupancyError::Database`] on transport failure
///
/// Neither failure path mutates any state.
pub async fn occupy_bed(pool: &SqlitePool, data: NewOccupancy) -> Result<Person, OccupancyError> {
    let mut tx = pool.begin().await?;

    let bed = sqlx::query_as::<_, Bed>(
        r#"
        SELECT id, room_id, bed_number, vacant
        FROM beds
        WHERE id = ?
        "#,
    )
    .bind(data.bed_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(OccupancyError::InvalidBed(data.bed_id))?;

    // Guarded flip: claims the bed only if it is still vacant. Losing the
    // race (or occupying a taken bed) affects zero rows.
    let claimed = sqlx::query("UPDATE beds SET vacant = 0 WHERE id = ? AND vacant = 1")
        .bind(bed.id)
        .execute(&mut *tx)
        .await?;

    if claimed.rows_affected() == 0 {
        return Err(OccupancyError::BedOccupied(bed.id));
    }

    let person = sqlx::query_as::<_, Person>(
        r#"
        INSERT INTO people (name, id_proof, room_id, bed_id, base_rent)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, id_proof, room_id, bed_id, base_rent
        "#,
    )
    .bind(data.name)
    .bind(data.id_proof)
    .bind(bed.room_id)
    .bind(bed.id)
    .bind(data.base_rent)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        person_id = person.id,
        bed_id = person.bed_id,
        room_id = person.room_id,
        "Tenant occupied bed"
    );

    Ok(person)
}
