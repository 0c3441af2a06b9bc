//! Property entity - Represents a single trackable rental unit.
//!
//! Each property has an `area_id` (its parent city), a default nightly rate,
//! bedrooms, a `property_type` tier, and an optional external listing link.
//! Backticks are used for field names to enable proper documentation linking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tier of a property listing, stored as a string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PropertyType {
    /// Premium listing
    #[sea_orm(string_value = "luxury")]
    Luxury,
    /// Standard listing
    #[sea_orm(string_value = "normal")]
    Normal,
}

/// Property database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Unique identifier for the property
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the area this property belongs to
    pub area_id: i64,
    /// Human-readable name of the unit
    pub name: String,
    /// Optional external listing URL
    pub airbnb_link: Option<String>,
    /// Default nightly rate, used when a day has no explicit booking row
    pub avg_price_per_day: f64,
    /// Optional free-text description
    pub description: Option<String>,
    /// Number of bedrooms
    pub bedrooms: i32,
    /// Listing tier: `luxury` or `normal`
    pub property_type: PropertyType,
    /// Whether the host carries superhost status
    pub is_superhost: bool,
    /// When the property was created (assigned by the persistence layer)
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each property belongs to one area
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id"
    )]
    Area,
    /// One property has many daily booking rows
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
