//! Property business logic - Handles all rental-unit operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! properties. A property always belongs to a live area; deleting a property
//! cascades to its booking rows.

use crate::{
    entities::{Booking, Property, PropertyType, booking, property},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Fields for creating a new property.
#[derive(Debug, Clone)]
pub struct NewProperty {
    /// Parent area; must reference an existing area
    pub area_id: i64,
    /// Human-readable name of the unit
    pub name: String,
    /// Optional external listing URL
    pub airbnb_link: Option<String>,
    /// Default nightly rate; must be positive
    pub avg_price_per_day: f64,
    /// Optional free-text description
    pub description: Option<String>,
    /// Number of bedrooms; must be at least 1
    pub bedrooms: i32,
    /// Listing tier
    pub property_type: PropertyType,
    /// Whether the host carries superhost status
    pub is_superhost: bool,
}

/// Partial update for a property. Only provided fields are changed.
///
/// Setting `area_id` re-parents the property to a different area.
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    /// New parent area
    pub area_id: Option<i64>,
    /// New display name
    pub name: Option<String>,
    /// New listing URL
    pub airbnb_link: Option<String>,
    /// New default nightly rate
    pub avg_price_per_day: Option<f64>,
    /// New description
    pub description: Option<String>,
    /// New bedroom count
    pub bedrooms: Option<i32>,
    /// New listing tier
    pub property_type: Option<PropertyType>,
    /// New superhost flag
    pub is_superhost: Option<bool>,
}

/// Retrieves all properties ordered by creation time.
pub async fn list_properties(db: &DatabaseConnection) -> Result<Vec<property::Model>> {
    Property::find()
        .order_by_asc(property::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all properties belonging to one area, ordered by creation time.
pub async fn list_properties_for_area(
    db: &DatabaseConnection,
    area_id: i64,
) -> Result<Vec<property::Model>> {
    Property::find()
        .filter(property::Column::AreaId.eq(area_id))
        .order_by_asc(property::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a property by its unique ID.
pub async fn get_property_by_id(
    db: &DatabaseConnection,
    property_id: i64,
) -> Result<Option<property::Model>> {
    Property::find_by_id(property_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new property under an existing area, performing input validation.
///
/// Validates that the name is non-empty, the default nightly rate is
/// positive, the bedroom count is at least 1, and the parent area exists.
pub async fn create_property(
    db: &DatabaseConnection,
    new_property: NewProperty,
) -> Result<property::Model> {
    if new_property.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Property name cannot be empty".to_string(),
        });
    }
    if new_property.avg_price_per_day <= 0.0 {
        return Err(Error::InvalidPrice {
            price: new_property.avg_price_per_day,
        });
    }
    if new_property.bedrooms < 1 {
        return Err(Error::Validation {
            message: format!("Bedroom count must be positive, got {}", new_property.bedrooms),
        });
    }
    let _area = crate::core::area::get_area_by_id(db, new_property.area_id)
        .await?
        .ok_or(Error::AreaNotFound {
            id: new_property.area_id,
        })?;

    let prop = property::ActiveModel {
        area_id: Set(new_property.area_id),
        name: Set(new_property.name.trim().to_string()),
        airbnb_link: Set(new_property.airbnb_link),
        avg_price_per_day: Set(new_property.avg_price_per_day),
        description: Set(new_property.description),
        bedrooms: Set(new_property.bedrooms),
        property_type: Set(new_property.property_type),
        is_superhost: Set(new_property.is_superhost),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = prop.insert(db).await?;
    info!(
        "Created property '{}' (id {}) in area {}",
        result.name, result.id, result.area_id
    );
    Ok(result)
}

/// Applies a partial patch to an existing property. Only provided fields
/// change; re-parenting validates that the destination area exists.
pub async fn update_property(
    db: &DatabaseConnection,
    property_id: i64,
    patch: PropertyPatch,
) -> Result<property::Model> {
    let prop = get_property_by_id(db, property_id)
        .await?
        .ok_or(Error::PropertyNotFound { id: property_id })?;

    let mut active_model: property::ActiveModel = prop.into();
    if let Some(area_id) = patch.area_id {
        let _area = crate::core::area::get_area_by_id(db, area_id)
            .await?
            .ok_or(Error::AreaNotFound { id: area_id })?;
        active_model.area_id = Set(area_id);
    }
    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Property name cannot be empty".to_string(),
            });
        }
        active_model.name = Set(name.trim().to_string());
    }
    if let Some(airbnb_link) = patch.airbnb_link {
        active_model.airbnb_link = Set(Some(airbnb_link));
    }
    if let Some(price) = patch.avg_price_per_day {
        if price <= 0.0 {
            return Err(Error::InvalidPrice { price });
        }
        active_model.avg_price_per_day = Set(price);
    }
    if let Some(description) = patch.description {
        active_model.description = Set(Some(description));
    }
    if let Some(bedrooms) = patch.bedrooms {
        if bedrooms < 1 {
            return Err(Error::Validation {
                message: format!("Bedroom count must be positive, got {bedrooms}"),
            });
        }
        active_model.bedrooms = Set(bedrooms);
    }
    if let Some(property_type) = patch.property_type {
        active_model.property_type = Set(property_type);
    }
    if let Some(is_superhost) = patch.is_superhost {
        active_model.is_superhost = Set(is_superhost);
    }

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a property and all booking rows that reference it.
pub async fn delete_property(db: &DatabaseConnection, property_id: i64) -> Result<()> {
    let _prop = get_property_by_id(db, property_id)
        .await?
        .ok_or(Error::PropertyNotFound { id: property_id })?;

    Booking::delete_many()
        .filter(booking::Column::PropertyId.eq(property_id))
        .exec(db)
        .await?;
    Property::delete_by_id(property_id).exec(db).await?;
    info!("Deleted property {property_id} and its bookings");
    Ok(())
}
