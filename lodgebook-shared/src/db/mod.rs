/// Database layer for Lodgebook
///
/// This module provides database connection pooling, migrations, and seed
/// data. Models are in the `models` module at crate root level.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: embedded migration runner
/// - `seed`: starter-layout provisioning for a fresh database
///
/// # Example
///
/// ```no_run
/// use lodgebook_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://lodgebook.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
pub mod seed;
