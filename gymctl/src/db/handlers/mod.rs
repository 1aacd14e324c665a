//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection, provides strongly-typed
//! operations for one entity, and returns models from [`crate::db::models`].
//! Uniform CRUD goes through the [`Repository`] trait; operations whose shape
//! is specific to an entity (status transitions, date-scoped booking queries,
//! dashboard aggregates) are inherent methods on the repository structs.

pub mod bookings;
pub mod boxes;
pub mod fitness_centers;
pub mod repository;
pub mod stats;
pub mod users;

pub use bookings::Bookings;
pub use boxes::Boxes;
pub use fitness_centers::FitnessCenters;
pub use repository::Repository;
pub use stats::Stats;
pub use users::Users;
