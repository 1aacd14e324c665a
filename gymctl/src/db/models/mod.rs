//! Database record models matching table schemas.
//!
//! Structs here correspond to database rows and to the insert/update payloads
//! repositories accept. They are deliberately separate from the API models in
//! [`crate::api::models`], with `From` conversions at the boundary, so storage
//! and wire representations can evolve independently.
//!
//! - [`fitness_centers`]: tenant records
//! - [`boxes`]: reservable training rooms
//! - [`bookings`]: hour-range reservations, the engine's input
//! - [`users`]: member records for admin reporting
//! - [`stats`]: aggregate rows for the admin dashboard

pub mod bookings;
pub mod boxes;
pub mod fitness_centers;
pub mod stats;
pub mod users;
