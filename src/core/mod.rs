//! Core business logic - framework-agnostic area, property, booking,
//! analytics, and export operations.

/// Pure monthly analytics over the in-memory collections
pub mod analytics;
/// Area (city) CRUD and cascade/move deletion
pub mod area;
/// Booking upserts - the calendar write path
pub mod booking;
/// CSV export of the monthly summary
pub mod export;
/// Property CRUD with cascading deletes
pub mod property;
