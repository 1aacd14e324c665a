//! API request and response data models.
//!
//! Wire-facing structures for HTTP deserialization and serialization. These
//! are distinct from the database models in [`crate::db::models`]; `From`
//! conversions sit at the boundary so the public contract and the storage
//! schema can evolve independently. All models carry `utoipa` annotations for
//! the generated API documentation.
//!
//! - [`availability`]: availability queries and the slot/day-closed responses
//! - [`boxes`]: box status, live listings, and schedule grids
//! - [`bookings`]: reservation payloads and views
//! - [`users`]: member summaries and admin membership updates
//! - [`stats`]: dashboard aggregates
//! - [`pagination`]: shared page/page_size parameters and the page envelope

pub mod availability;
pub mod bookings;
pub mod boxes;
pub mod pagination;
pub mod stats;
pub mod users;
