//! Area entity - Represents a city or region grouping of properties.
//!
//! Areas are the top-level partition of the tracker: every property belongs
//! to exactly one area, and cross-city analytics group by area.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Area database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "areas")]
pub struct Model {
    /// Unique identifier for the area
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the city or region (e.g., "Goa", "Jaipur")
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional display image URL
    pub image_url: Option<String>,
    /// When the area was created (assigned by the persistence layer)
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Area and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One area has many properties
    #[sea_orm(has_many = "super::property::Entity")]
    Properties,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
