//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod area;
pub mod booking;
pub mod property;

// Re-export specific types to avoid conflicts
pub use area::{Column as AreaColumn, Entity as Area, Model as AreaModel};
pub use booking::{
    BookingStatus, Column as BookingColumn, Entity as Booking, Model as BookingModel,
};
pub use property::{
    Column as PropertyColumn, Entity as Property, Model as PropertyModel, PropertyType,
};
