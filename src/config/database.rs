//! Database configuration module for the stay tracker.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to automatically generate SQL statements from
//! the entity models, ensuring that the database schema matches the Rust struct definitions
//! without requiring manual SQL. Bookings additionally get a unique index on
//! `(property_id, date)`: that pair is the upsert key, and the schema is what
//! makes duplicate rows for the same property/day impossible.

use crate::entities::{Area, Booking, Property, booking};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
///
/// The URL typically comes from [`crate::config::settings::Settings`], which
/// already folds in the `DATABASE_URL` environment override.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity
/// definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation. It creates tables for areas, properties, and bookings,
/// plus the composite unique index that backs booking upserts.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let area_table = schema.create_table_from_entity(Area);
    let property_table = schema.create_table_from_entity(Property);
    let booking_table = schema.create_table_from_entity(Booking);

    db.execute(builder.build(&area_table)).await?;
    db.execute(builder.build(&property_table)).await?;
    db.execute(builder.build(&booking_table)).await?;

    // One row per (property, day); upserts conflict on this index.
    let booking_day_index = Index::create()
        .name("idx_bookings_property_date")
        .table(Booking)
        .col(booking::Column::PropertyId)
        .col(booking::Column::Date)
        .unique()
        .to_owned();
    db.execute(builder.build(&booking_day_index)).await?;

    Ok(())
}
