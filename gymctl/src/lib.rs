//! # gymctl: Booking Backend for Fitness Centers
//!
//! `gymctl` is a multi-tenant backend for reserving "boxes" — bookable
//! training rooms inside a fitness center. It exposes a REST API for checking
//! availability, creating and cancelling bookings, managing box status, and
//! admin reporting over members and booking volume.
//!
//! ## Overview
//!
//! The heart of the service is the [`scheduling`] module: a pure availability
//! engine that, given the bookings already on file for a day, enumerates every
//! start hour at which a reservation of the requested length still fits. Every
//! endpoint that needs overlap semantics — availability listings, booking
//! creation, the live floor view, schedule grids, box closures — goes through
//! that one implementation.
//!
//! Reservations are hour-ranged and day-local: a booking occupies
//! `[start_hour, start_hour + duration_hours)` on one calendar day, never
//! crossing midnight, with durations of one to four hours. Availability is
//! computed from a snapshot, so the database carries the authoritative
//! no-double-booking guard: an exclusion constraint over
//! `(box, date, hour range)` makes the losing side of a booking race fail
//! with a conflict instead of corrupting the schedule.
//!
//! Authentication and payments are deliberately out of scope; the service
//! expects an authenticating gateway in front of it and leaves charging
//! members to other systems.
//!
//! ## Architecture
//!
//! Built on [Axum](https://github.com/tokio-rs/axum) with PostgreSQL for
//! persistence:
//!
//! - the **API layer** ([`api`]) holds the route handlers and wire models,
//!   rejecting malformed input before the engine or database is reached;
//! - the **scheduling engine** ([`scheduling`]) is pure and clock-free —
//!   handlers inject the current time explicitly;
//! - the **database layer** ([`db`]) follows the repository pattern over SQLx
//!   connections, with plain SQL migrations under `migrations/`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use gymctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = gymctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     gymctl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod scheduling;
pub mod telemetry;
mod types;

#[cfg(test)]
mod test;

use crate::{
    api::models::{boxes::BoxStatus, users::MemberRole},
    config::CorsOrigin,
    db::handlers::{Boxes, FitnessCenters, Repository, Users},
    db::models::{
        boxes::BoxCreateDBRequest, fitness_centers::FitnessCenterCreateDBRequest,
        users::UserCreateDBRequest,
    },
    openapi::ApiDoc,
};
use axum::{
    http::{self, HeaderValue},
    routing::{delete, get, patch, post},
    Router,
};
pub use config::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, instrument, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{BookingId, BoxId, FitnessCenterId, UserId};

/// Application state shared across all request handlers.
///
/// Cheap to clone: the pool is reference-counted and the config is small.
#[derive(Clone, bon::Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the gymctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Name of the fitness center created by demo seeding; its presence marks the
/// database as already seeded.
const DEMO_CENTER_NAME: &str = "Copenhagen Gym";

/// Seed the database with a demo fitness center (run only once).
///
/// Creates one center with a rack of boxes and a handful of members so a
/// fresh instance is explorable. Idempotent: if the demo center already
/// exists, nothing is touched.
#[instrument(skip_all)]
pub async fn seed_demo_data(db: &PgPool) -> anyhow::Result<()> {
    let mut tx = db.begin().await?;

    let mut centers = FitnessCenters::new(&mut tx);
    if centers.get_by_name(DEMO_CENTER_NAME).await?.is_some() {
        info!("Database already seeded, skipping demo data");
        return Ok(());
    }

    info!("Seeding database with demo data");

    let center = centers
        .create(&FitnessCenterCreateDBRequest {
            name: DEMO_CENTER_NAME.to_string(),
            address: "Vesterbrogade 1, 1620 København V".to_string(),
        })
        .await?;

    let mut boxes = Boxes::new(&mut tx);
    for box_number in 1..=8 {
        boxes
            .create(&BoxCreateDBRequest {
                box_number,
                fitness_center_id: center.id,
                status: BoxStatus::Open,
            })
            .await?;
    }

    let members = [
        ("admin@gym.example", "Alma", "Jensen", "+45 20 12 34 56", MemberRole::Admin),
        ("freja@example.com", "Freja", "Nielsen", "+45 28 76 54 32", MemberRole::Member),
        ("oscar@example.com", "Oscar", "Hansen", "+45 31 11 22 33", MemberRole::Member),
        ("ida@example.com", "Ida", "Larsen", "+45 42 99 88 77", MemberRole::Member),
    ];

    let mut users = Users::new(&mut tx);
    for (email, first_name, last_name, phone, role) in members {
        users
            .create(&UserCreateDBRequest {
                email: email.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                phone: phone.to_string(),
                is_member: true,
                role,
                fitness_center_id: center.id,
            })
            .await?;
    }

    tx.commit().await?;
    info!("Demo data seeded");

    Ok(())
}

/// Create the CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.cors.allowed_origins {
        let header_value = match origin {
            CorsOrigin::Wildcard => "*".parse::<HeaderValue>()?,
            CorsOrigin::Url(url) => url.as_str().trim_end_matches('/').parse::<HeaderValue>()?,
        };
        origins.push(header_value);
    }

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(config.cors.allow_credentials)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::DELETE,
        ])
        .allow_headers([http::header::CONTENT_TYPE]);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        // Availability
        .route(
            "/centers/{center_id}/availability",
            get(api::handlers::availability::get_center_availability),
        )
        // Boxes
        .route("/centers/{center_id}/boxes", get(api::handlers::boxes::list_boxes))
        .route(
            "/centers/{center_id}/boxes/{box_id}",
            delete(api::handlers::boxes::delete_box),
        )
        .route(
            "/centers/{center_id}/boxes/{box_id}/schedule",
            get(api::handlers::boxes::get_box_schedule),
        )
        .route(
            "/centers/{center_id}/boxes/{box_id}/status",
            patch(api::handlers::boxes::update_box_status),
        )
        // Bookings
        .route("/bookings", post(api::handlers::bookings::create_booking))
        .route(
            "/bookings/{id}",
            get(api::handlers::bookings::get_booking).delete(api::handlers::bookings::delete_booking),
        )
        .route(
            "/users/{user_id}/bookings",
            get(api::handlers::bookings::list_user_bookings),
        )
        // Member administration
        .route("/centers/{center_id}/users", get(api::handlers::users::list_center_users))
        .route("/users/{id}/membership", patch(api::handlers::users::update_membership))
        .route("/users/{id}", delete(api::handlers::users::delete_user))
        // Dashboard
        .route("/centers/{center_id}/stats", get(api::handlers::stats::get_center_stats))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// The assembled application: a connected pool, migrated schema, and router.
pub struct Application {
    state: AppState,
}

impl Application {
    /// Connect to the database, run migrations, optionally seed demo data,
    /// and prepare the application state.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect(&config.database.url)
            .await?;

        migrator().run(&pool).await?;

        if config.seed_demo_data {
            seed_demo_data(&pool).await?;
        }

        Ok(Self {
            state: AppState::builder().db(pool).config(config).build(),
        })
    }

    /// Serve the API until the shutdown future resolves.
    pub async fn serve(self, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
        let router = build_router(&self.state)?;

        let addr = format!("{}:{}", self.state.config.host, self.state.config.port);
        let listener = TcpListener::bind(&addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
