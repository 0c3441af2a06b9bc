//! Area business logic - Handles all city/area-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting areas.
//! Deleting an area takes an explicit [`DeleteAction`]: the caller decides
//! whether child properties are destroyed with it or moved to another area.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{Area, Booking, Property, area, booking, property},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Fields for creating a new area.
#[derive(Debug, Clone)]
pub struct NewArea {
    /// Display name of the city or region
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional display image URL
    pub image_url: Option<String>,
}

/// Partial update for an area. Only provided fields are changed.
#[derive(Debug, Clone, Default)]
pub struct AreaPatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New image URL
    pub image_url: Option<String>,
}

/// What to do with an area's child properties when the area is deleted.
///
/// There is no default: every caller must decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    /// Destroy all child properties and, transitively, their bookings.
    Cascade,
    /// Re-parent all child properties to the given area before deleting.
    MoveTo(i64),
}

/// Retrieves all areas ordered by creation time (insertion order).
pub async fn list_areas(db: &DatabaseConnection) -> Result<Vec<area::Model>> {
    Area::find()
        .order_by_asc(area::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an area by its unique ID.
pub async fn get_area_by_id(db: &DatabaseConnection, area_id: i64) -> Result<Option<area::Model>> {
    Area::find_by_id(area_id).one(db).await.map_err(Into::into)
}

/// Creates a new area, performing input validation.
///
/// The name must be non-empty after trimming. The creation timestamp is
/// assigned here, at the persistence layer.
pub async fn create_area(db: &DatabaseConnection, new_area: NewArea) -> Result<area::Model> {
    if new_area.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Area name cannot be empty".to_string(),
        });
    }

    let area = area::ActiveModel {
        name: Set(new_area.name.trim().to_string()),
        description: Set(new_area.description),
        image_url: Set(new_area.image_url),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = area.insert(db).await?;
    info!("Created area '{}' (id {})", result.name, result.id);
    Ok(result)
}

/// Applies a partial patch to an existing area. Only provided fields change.
pub async fn update_area(
    db: &DatabaseConnection,
    area_id: i64,
    patch: AreaPatch,
) -> Result<area::Model> {
    let area = get_area_by_id(db, area_id)
        .await?
        .ok_or(Error::AreaNotFound { id: area_id })?;

    let mut active_model: area::ActiveModel = area.into();
    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Area name cannot be empty".to_string(),
            });
        }
        active_model.name = Set(name.trim().to_string());
    }
    if let Some(description) = patch.description {
        active_model.description = Set(Some(description));
    }
    if let Some(image_url) = patch.image_url {
        active_model.image_url = Set(Some(image_url));
    }

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes an area after handling its child properties per `action`.
///
/// `MoveTo` issues one independent update per child property before the
/// area delete. The sequence is best-effort: a failure partway leaves the
/// already-moved properties in place and the area intact, with no rollback.
/// Callers recover by re-reading state and retrying the delete.
pub async fn delete_area(db: &DatabaseConnection, area_id: i64, action: DeleteAction) -> Result<()> {
    let _area = get_area_by_id(db, area_id)
        .await?
        .ok_or(Error::AreaNotFound { id: area_id })?;

    match action {
        DeleteAction::MoveTo(destination_id) => {
            if destination_id == area_id {
                return Err(Error::Validation {
                    message: "Cannot move properties to the area being deleted".to_string(),
                });
            }
            let _destination = get_area_by_id(db, destination_id)
                .await?
                .ok_or(Error::AreaNotFound { id: destination_id })?;

            let area_properties = Property::find()
                .filter(property::Column::AreaId.eq(area_id))
                .all(db)
                .await?;
            let moved = area_properties.len();
            for prop in area_properties {
                let mut active_model: property::ActiveModel = prop.into();
                active_model.area_id = Set(destination_id);
                active_model.update(db).await?;
            }
            info!(
                "Moved {moved} properties from area {area_id} to area {destination_id}"
            );
        }
        DeleteAction::Cascade => {
            let property_ids: Vec<i64> = Property::find()
                .filter(property::Column::AreaId.eq(area_id))
                .all(db)
                .await?
                .into_iter()
                .map(|p| p.id)
                .collect();

            if !property_ids.is_empty() {
                Booking::delete_many()
                    .filter(booking::Column::PropertyId.is_in(property_ids.clone()))
                    .exec(db)
                    .await?;
                Property::delete_many()
                    .filter(property::Column::AreaId.eq(area_id))
                    .exec(db)
                    .await?;
                info!(
                    "Cascade-deleted {} properties of area {area_id}",
                    property_ids.len()
                );
            }
        }
    }

    Area::delete_by_id(area_id).exec(db).await?;
    info!("Deleted area {area_id}");
    Ok(())
}
