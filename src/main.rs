//! Wiring binary: loads configuration, opens the database, fills the state
//! cache, and logs the current month's all-cities summary.

use chrono::Utc;
use dotenvy::dotenv;
use stay_tracker::cache::StateCache;
use stay_tracker::config;
use stay_tracker::core::analytics;
use stay_tracker::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application settings
    let settings = config::settings::load_default_config()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db = config::database::create_connection(&settings.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Fill the state cache
    let cache = StateCache::new(db);
    cache
        .load()
        .await
        .inspect_err(|e| error!("Failed to load collections: {}", e))?;

    // 6. Log the current month's all-cities summary
    let today = Utc::now().date_naive();
    let properties = cache.properties().await;
    let bookings = cache.bookings().await;
    let summary = analytics::monthly_summary(&properties, &bookings, None, today);
    info!(
        "{}: {} properties, {} booked nights, revenue {}, occupancy {:.1}%",
        today.format("%B %Y"),
        summary.total_properties,
        summary.total_booked_nights,
        stay_tracker::core::export::format_inr(summary.total_revenue),
        summary.average_occupancy_rate,
    );

    Ok(())
}
