//! HTTP request handlers for all API endpoints.
//!
//! Handlers are responsible for:
//! - request validation and deserialization (anything out of range is
//!   rejected with a 4xx before the engine or database is touched)
//! - business logic execution via the scheduling engine and repositories
//! - response serialization
//!
//! # Handler Modules
//!
//! - [`availability`]: open-slot computation for a center's boxes
//! - [`boxes`]: box listing, schedule grids, status transitions
//! - [`bookings`]: reservation creation, listing, detail, cancellation
//! - [`users`]: member listing/search and membership administration
//! - [`stats`]: dashboard aggregates
//!
//! # Time
//!
//! Endpoints that act on "now" (the live floor view, box closures) read the
//! server's local wall clock once at the top of the handler and pass it down
//! as a value; the scheduling engine itself never consults a clock.
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`], which maps to appropriate HTTP
//! status codes: engine rejections become 400, missing rows 404, and a lost
//! booking race 409.

pub mod availability;
pub mod bookings;
pub mod boxes;
pub mod stats;
pub mod users;
