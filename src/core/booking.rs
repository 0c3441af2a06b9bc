//! Booking business logic - The calendar write path.
//!
//! All calendar state flows through [`upsert_booking`], keyed on
//! `(property_id, date)`: a write for a new key inserts a row, a write for
//! an existing key overwrites `status`, `price`, and `notes` in place. The
//! schema's unique index guarantees at most one row per property/day.

use crate::{
    entities::{Booking, BookingStatus, booking},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::sea_query::OnConflict;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// One calendar day write, the unit of the upsert path.
#[derive(Debug, Clone)]
pub struct BookingWrite {
    /// Property whose day is being set
    pub property_id: i64,
    /// Calendar date of the night
    pub date: NaiveDate,
    /// New status for the day
    pub status: BookingStatus,
    /// Nightly price; the realized rate for booked days
    pub price: f64,
    /// Optional free-text note
    pub notes: Option<String>,
}

/// A day seeded during property creation.
#[derive(Debug, Clone)]
pub struct SeedDay {
    /// Calendar date of the night
    pub date: NaiveDate,
    /// Initial status
    pub status: BookingStatus,
    /// Initial nightly price
    pub price: f64,
}

/// Retrieves all booking rows ordered by date.
pub async fn list_bookings(db: &DatabaseConnection) -> Result<Vec<booking::Model>> {
    Booking::find()
        .order_by_asc(booking::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all booking rows of one property, ordered by date.
pub async fn list_bookings_for_property(
    db: &DatabaseConnection,
    property_id: i64,
) -> Result<Vec<booking::Model>> {
    Booking::find()
        .filter(booking::Column::PropertyId.eq(property_id))
        .order_by_asc(booking::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds the booking row for one property/day pair, if it exists.
pub async fn find_booking(
    db: &DatabaseConnection,
    property_id: i64,
    date: NaiveDate,
) -> Result<Option<booking::Model>> {
    Booking::find()
        .filter(booking::Column::PropertyId.eq(property_id))
        .filter(booking::Column::Date.eq(date))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts or overwrites the booking row for `(property_id, date)`.
///
/// On conflict with an existing row, `status`, `price`, and `notes` are
/// overwritten in place; the row keeps its identity. Returns the canonical
/// row as stored.
pub async fn upsert_booking(
    db: &DatabaseConnection,
    write: BookingWrite,
) -> Result<booking::Model> {
    if write.price < 0.0 {
        return Err(Error::InvalidPrice { price: write.price });
    }
    let _property = crate::core::property::get_property_by_id(db, write.property_id)
        .await?
        .ok_or(Error::PropertyNotFound {
            id: write.property_id,
        })?;

    let active_model = booking::ActiveModel {
        property_id: Set(write.property_id),
        date: Set(write.date),
        status: Set(write.status),
        price: Set(write.price),
        notes: Set(write.notes),
        ..Default::default()
    };

    Booking::insert(active_model)
        .on_conflict(
            OnConflict::columns([booking::Column::PropertyId, booking::Column::Date])
                .update_columns([
                    booking::Column::Status,
                    booking::Column::Price,
                    booking::Column::Notes,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;
    debug!(
        "Upserted booking for property {} on {}",
        write.property_id, write.date
    );

    find_booking(db, write.property_id, write.date)
        .await?
        .ok_or_else(|| {
            Error::Database(sea_orm::DbErr::RecordNotFound(format!(
                "booking for property {} on {} missing after upsert",
                write.property_id, write.date
            )))
        })
}

/// Cycles a day's status: `booked → available → booked → ...`.
///
/// Booked days are priced at the property's default nightly rate, available
/// days at 0. A day with no row counts as available, so the first toggle
/// books it.
pub async fn toggle_booking_status(
    db: &DatabaseConnection,
    property_id: i64,
    date: NaiveDate,
) -> Result<booking::Model> {
    let property = crate::core::property::get_property_by_id(db, property_id)
        .await?
        .ok_or(Error::PropertyNotFound { id: property_id })?;

    let current = find_booking(db, property_id, date)
        .await?
        .map_or(BookingStatus::Available, |row| row.status);
    let next = if current == BookingStatus::Booked {
        BookingStatus::Available
    } else {
        BookingStatus::Booked
    };
    let price = if next == BookingStatus::Booked {
        property.avg_price_per_day
    } else {
        0.0
    };

    upsert_booking(
        db,
        BookingWrite {
            property_id,
            date,
            status: next,
            price,
            notes: None,
        },
    )
    .await
}

/// Sets a custom nightly price for an available day.
pub async fn set_custom_price(
    db: &DatabaseConnection,
    property_id: i64,
    date: NaiveDate,
    price: f64,
) -> Result<booking::Model> {
    if price <= 0.0 {
        return Err(Error::InvalidPrice { price });
    }

    upsert_booking(
        db,
        BookingWrite {
            property_id,
            date,
            status: BookingStatus::Available,
            price,
            notes: None,
        },
    )
    .await
}

/// Seeds a property's calendar with initial days, one upsert at a time.
///
/// The writes are serialized deliberately: each awaits the previous one, so
/// a failure reports exactly how far the seeding got.
pub async fn seed_bookings(
    db: &DatabaseConnection,
    property_id: i64,
    days: Vec<SeedDay>,
) -> Result<Vec<booking::Model>> {
    let mut created = Vec::with_capacity(days.len());
    for seed in days {
        let row = upsert_booking(
            db,
            BookingWrite {
                property_id,
                date: seed.date,
                status: seed.status,
                price: seed.price,
                notes: None,
            },
        )
        .await?;
        created.push(row);
    }
    Ok(created)
}
