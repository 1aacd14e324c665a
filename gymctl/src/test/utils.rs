//! Test utilities for integration testing.

use crate::{build_router, AppState, Config};
use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_demo_data: false,
        ..Config::default()
    }
}

/// A test server over the real router with a lazily-connected pool.
///
/// No connection is made until a handler actually touches the database, so
/// every request that must be rejected up front — malformed input, day-closed
/// short-circuits — is exercised end-to-end without a running PostgreSQL.
pub fn create_test_server() -> TestServer {
    let config = create_test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool from default database URL");

    let state = AppState::builder().db(pool).config(config).build();
    let router = build_router(&state).expect("Failed to build router");

    TestServer::new(router).expect("Failed to create test server")
}
