//! Client state cache - the in-memory mirror of the remote collections.
//!
//! [`StateCache`] owns the database connection plus mirrors of all areas,
//! properties, and bookings for the session. It is the mutation API the
//! presentation layer calls: every mutation awaits the remote write, then
//! patches the mirror on success only. On failure nothing local changes and
//! the error propagates; [`StateCache::load`] re-fetches everything and is
//! the recovery path after a partial multi-step flow.
//!
//! The cache is an explicitly owned, injectable container - callers pass it
//! by reference, and the analytics engine takes plain snapshot slices.

use crate::core::area::{AreaPatch, DeleteAction, NewArea};
use crate::core::booking::{BookingWrite, SeedDay};
use crate::core::property::{NewProperty, PropertyPatch};
use crate::core::{area as area_ops, booking as booking_ops, property as property_ops};
use crate::entities::{area, booking, property};
use crate::errors::Result;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory mirror of the three collections, kept consistent with the
/// database by re-fetching on load and patching on every successful mutation.
pub struct StateCache {
    db: DatabaseConnection,
    areas: RwLock<Vec<area::Model>>,
    properties: RwLock<Vec<property::Model>>,
    bookings: RwLock<Vec<booking::Model>>,
}

impl StateCache {
    /// Creates an empty cache over the given connection. Call
    /// [`StateCache::load`] before reading snapshots.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            areas: RwLock::new(Vec::new()),
            properties: RwLock::new(Vec::new()),
            bookings: RwLock::new(Vec::new()),
        }
    }

    /// The underlying connection, for callers that need direct reads.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Re-fetches all three collections, replacing the mirrors.
    ///
    /// Areas and properties come back in creation order, bookings by date.
    pub async fn load(&self) -> Result<()> {
        let areas = area_ops::list_areas(&self.db).await?;
        let properties = property_ops::list_properties(&self.db).await?;
        let bookings = booking_ops::list_bookings(&self.db).await?;

        info!(
            "Loaded {} areas, {} properties, {} bookings",
            areas.len(),
            properties.len(),
            bookings.len()
        );

        *self.areas.write().await = areas;
        *self.properties.write().await = properties;
        *self.bookings.write().await = bookings;
        Ok(())
    }

    /// Snapshot of all areas, in insertion order.
    pub async fn areas(&self) -> Vec<area::Model> {
        self.areas.read().await.clone()
    }

    /// Snapshot of all properties, in insertion order.
    pub async fn properties(&self) -> Vec<property::Model> {
        self.properties.read().await.clone()
    }

    /// Snapshot of all booking rows, ordered by date as of the last load.
    pub async fn bookings(&self) -> Vec<booking::Model> {
        self.bookings.read().await.clone()
    }

    /// Creates an area and appends it to the mirror.
    pub async fn add_area(&self, new_area: NewArea) -> Result<area::Model> {
        let created = area_ops::create_area(&self.db, new_area).await?;
        self.areas.write().await.push(created.clone());
        Ok(created)
    }

    /// Patches an area, replacing the mirror entry in place.
    pub async fn update_area(&self, area_id: i64, patch: AreaPatch) -> Result<area::Model> {
        let updated = area_ops::update_area(&self.db, area_id, patch).await?;
        let mut areas = self.areas.write().await;
        if let Some(entry) = areas.iter_mut().find(|a| a.id == area_id) {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes an area, applying the same cascade or move to the mirrors
    /// that the store performed.
    pub async fn delete_area(&self, area_id: i64, action: DeleteAction) -> Result<()> {
        area_ops::delete_area(&self.db, area_id, action).await?;

        self.areas.write().await.retain(|a| a.id != area_id);
        match action {
            DeleteAction::MoveTo(destination_id) => {
                let mut properties = self.properties.write().await;
                for prop in properties.iter_mut().filter(|p| p.area_id == area_id) {
                    prop.area_id = destination_id;
                }
            }
            DeleteAction::Cascade => {
                let mut properties = self.properties.write().await;
                let removed: Vec<i64> = properties
                    .iter()
                    .filter(|p| p.area_id == area_id)
                    .map(|p| p.id)
                    .collect();
                properties.retain(|p| p.area_id != area_id);
                drop(properties);

                self.bookings
                    .write()
                    .await
                    .retain(|b| !removed.contains(&b.property_id));
            }
        }
        Ok(())
    }

    /// Creates a property and appends it to the mirror.
    pub async fn add_property(&self, new_property: NewProperty) -> Result<property::Model> {
        let created = property_ops::create_property(&self.db, new_property).await?;
        self.properties.write().await.push(created.clone());
        Ok(created)
    }

    /// Creates a property, then seeds its calendar one upsert at a time.
    ///
    /// The seed writes are serialized; a failure partway leaves the property
    /// and the already-written days in place.
    pub async fn add_property_with_calendar(
        &self,
        new_property: NewProperty,
        seed_days: Vec<SeedDay>,
    ) -> Result<property::Model> {
        let created = self.add_property(new_property).await?;
        for seed in seed_days {
            self.upsert_booking(BookingWrite {
                property_id: created.id,
                date: seed.date,
                status: seed.status,
                price: seed.price,
                notes: None,
            })
            .await?;
        }
        Ok(created)
    }

    /// Patches a property, replacing the mirror entry in place.
    pub async fn update_property(
        &self,
        property_id: i64,
        patch: PropertyPatch,
    ) -> Result<property::Model> {
        let updated = property_ops::update_property(&self.db, property_id, patch).await?;
        let mut properties = self.properties.write().await;
        if let Some(entry) = properties.iter_mut().find(|p| p.id == property_id) {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes a property, removing it and its booking rows from the mirrors.
    pub async fn delete_property(&self, property_id: i64) -> Result<()> {
        property_ops::delete_property(&self.db, property_id).await?;
        self.properties.write().await.retain(|p| p.id != property_id);
        self.bookings
            .write()
            .await
            .retain(|b| b.property_id != property_id);
        Ok(())
    }

    /// Upserts a booking row and patches the `(property_id, date)` entry.
    pub async fn upsert_booking(&self, write: BookingWrite) -> Result<booking::Model> {
        let row = booking_ops::upsert_booking(&self.db, write).await?;
        self.apply_booking(row.clone()).await;
        Ok(row)
    }

    /// Toggles a day's status through the booked/available cycle.
    pub async fn toggle_booking(
        &self,
        property_id: i64,
        date: NaiveDate,
    ) -> Result<booking::Model> {
        let row = booking_ops::toggle_booking_status(&self.db, property_id, date).await?;
        self.apply_booking(row.clone()).await;
        Ok(row)
    }

    /// Sets a custom nightly price for an available day.
    pub async fn set_custom_price(
        &self,
        property_id: i64,
        date: NaiveDate,
        price: f64,
    ) -> Result<booking::Model> {
        let row = booking_ops::set_custom_price(&self.db, property_id, date, price).await?;
        self.apply_booking(row.clone()).await;
        Ok(row)
    }

    /// Replaces the mirror entry for the row's `(property_id, date)` key,
    /// or appends when the key is new.
    async fn apply_booking(&self, row: booking::Model) {
        let mut bookings = self.bookings.write().await;
        if let Some(entry) = bookings
            .iter_mut()
            .find(|b| b.property_id == row.property_id && b.date == row.date)
        {
            *entry = row;
        } else {
            bookings.push(row);
        }
    }
}
