//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Endpoints are nested under `/api/v1` and grouped by resource:
//!
//! - **Availability** (`/centers/{id}/availability`): open-slot computation
//! - **Boxes** (`/centers/{id}/boxes/*`): box listing, schedule grids, status
//! - **Bookings** (`/bookings/*`, `/users/{id}/bookings`): reservation lifecycle
//! - **Members** (`/centers/{id}/users`, `/users/{id}/*`): admin reporting
//! - **Stats** (`/centers/{id}/stats`): dashboard aggregates
//!
//! Authentication is delegated to a gateway in front of the service; handlers
//! validate input shape and range, and reject anything malformed before the
//! scheduling engine or the database is reached.
//!
//! # OpenAPI Documentation
//!
//! All endpoints carry `utoipa` annotations; the rendered documentation is
//! served at `/docs` when the server is running.

pub mod handlers;
pub mod models;
