//! Seed tool
//!
//! Provisions a fresh database with the starter layout: "Room 1" with
//! beds 1 and 2, "Room 2" with bed 1. Safe to re-run; seeding is skipped
//! when rooms already exist.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p lodgebook-api --bin seed
//! ```

use lodgebook_api::config::Config;
use lodgebook_shared::db::migrations::run_migrations;
use lodgebook_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
use lodgebook_shared::db::seed::seed_database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lodgebook_shared=info,seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    let summary = seed_database(&pool).await?;
    if summary.is_empty() {
        println!("Database already seeded, nothing to do");
    } else {
        for room in &summary.rooms {
            println!("Created room {} ({})", room.id, room.name);
        }
        for bed in &summary.beds {
            println!("Created bed {} (room {}, bed number {})", bed.id, bed.room_id, bed.bed_number);
        }
    }

    close_pool(pool).await;
    Ok(())
}
