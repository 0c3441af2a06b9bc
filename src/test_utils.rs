//! Shared test utilities for the stay tracker.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{area, booking, property},
    entities::{self, BookingStatus, PropertyType},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for building a calendar date in tests.
///
/// # Panics
/// Panics on an invalid year/month/day triple.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a test area with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Area name
///
/// # Defaults
/// * `description`: None
/// * `image_url`: None
pub async fn create_test_area(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::area::Model> {
    area::create_area(
        db,
        area::NewArea {
            name: name.to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
}

/// Creates a test property with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `area_id` - Parent area ID
/// * `name` - Property name
///
/// # Defaults
/// * `avg_price_per_day`: 3000.0
/// * `bedrooms`: 2
/// * `property_type`: Normal
/// * `is_superhost`: false
pub async fn create_test_property(
    db: &DatabaseConnection,
    area_id: i64,
    name: &str,
) -> Result<entities::property::Model> {
    property::create_property(
        db,
        property::NewProperty {
            area_id,
            name: name.to_string(),
            airbnb_link: None,
            avg_price_per_day: 3000.0,
            description: None,
            bedrooms: 2,
            property_type: PropertyType::Normal,
            is_superhost: false,
        },
    )
    .await
}

/// Creates a test property with custom rate and tier.
/// Use this when a test needs specific pricing.
pub async fn create_custom_property(
    db: &DatabaseConnection,
    area_id: i64,
    name: &str,
    avg_price_per_day: f64,
    property_type: PropertyType,
) -> Result<entities::property::Model> {
    property::create_property(
        db,
        property::NewProperty {
            area_id,
            name: name.to_string(),
            airbnb_link: None,
            avg_price_per_day,
            description: None,
            bedrooms: 2,
            property_type,
            is_superhost: false,
        },
    )
    .await
}

/// Writes a booked night for a property at the given price.
pub async fn create_booked_night(
    db: &DatabaseConnection,
    property_id: i64,
    date: NaiveDate,
    price: f64,
) -> Result<entities::booking::Model> {
    booking::upsert_booking(
        db,
        booking::BookingWrite {
            property_id,
            date,
            status: BookingStatus::Booked,
            price,
            notes: None,
        },
    )
    .await
}

/// Sets up a complete test environment with an area and one property.
/// Returns (db, area, property) for common test scenarios.
pub async fn setup_with_property() -> Result<(
    DatabaseConnection,
    entities::area::Model,
    entities::property::Model,
)> {
    let db = setup_test_db().await?;
    let area = create_test_area(&db, "Test Area").await?;
    let prop = create_test_property(&db, area.id, "Test Property").await?;
    Ok((db, area, prop))
}
