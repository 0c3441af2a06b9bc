//! Booking entity - The state of one property on one calendar day.
//!
//! Rows are created lazily: a day with no row is implicitly available at the
//! property's default rate. The pair `(property_id, date)` is unique; the
//! sole write path is an upsert keyed on it (see `core::booking`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Day status, stored as a string column.
///
/// `Blocked` exists in the schema but no current write path produces it;
/// only `Booked` rows count toward revenue and occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookingStatus {
    /// Open for booking
    #[sea_orm(string_value = "available")]
    Available,
    /// Booked at `price` for the night
    #[sea_orm(string_value = "booked")]
    Booked,
    /// Taken off the market (schema-only state)
    #[sea_orm(string_value = "blocked")]
    Blocked,
}

/// Booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// Unique identifier for the booking row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the property this day belongs to
    pub property_id: i64,
    /// Calendar date of the night, no timezone
    pub date: Date,
    /// Day status: `available`, `booked`, or `blocked`
    pub status: BookingStatus,
    /// Nightly price; for `booked` rows the realized rate actually charged
    pub price: f64,
    /// Optional free-text note
    pub notes: Option<String>,
}

/// Defines relationships between Booking and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each booking row belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
