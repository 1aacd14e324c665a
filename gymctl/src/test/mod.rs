//! Integration tests over the HTTP surface.
//!
//! These drive the real router end-to-end and pin down the behavior the API
//! must deliver before any storage is involved: input validation, the
//! day-closed short-circuits, and the service plumbing routes. Paths that
//! need rows (creating bookings against a box, listing members) are covered
//! at the repository/engine level and against a live database in deployment
//! smoke tests.

pub mod utils;

use serde_json::{json, Value};
use utils::create_test_server;

#[test_log::test(tokio::test)]
async fn healthz_reports_ok() {
    let server = create_test_server();

    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "OK");
}

#[test_log::test(tokio::test)]
async fn docs_are_served() {
    let server = create_test_server();

    let response = server.get("/docs").await;
    assert_eq!(response.status_code(), 200);
}

#[test_log::test(tokio::test)]
async fn availability_rejects_out_of_range_duration() {
    let server = create_test_server();

    for duration in ["0", "5", "12"] {
        let response = server
            .get("/api/v1/centers/1/availability")
            .add_query_param("date", "2026-08-10")
            .add_query_param("time", "10:00")
            .add_query_param("duration", duration)
            .await;

        assert_eq!(response.status_code(), 400, "duration {duration} must be rejected");
        assert!(response.text().contains("duration"));
    }
}

#[test_log::test(tokio::test)]
async fn availability_rejects_malformed_time() {
    let server = create_test_server();

    for time in ["25:00", "12:60", "9:15", "noonish", "123"] {
        let response = server
            .get("/api/v1/centers/1/availability")
            .add_query_param("date", "2026-08-10")
            .add_query_param("time", time)
            .add_query_param("duration", "2")
            .await;

        assert_eq!(response.status_code(), 400, "time {time:?} must be rejected");
    }
}

#[test_log::test(tokio::test)]
async fn availability_rejects_malformed_date() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/centers/1/availability")
        .add_query_param("date", "10-08-2026")
        .add_query_param("time", "10:00")
        .add_query_param("duration", "2")
        .await;

    assert_eq!(response.status_code(), 400);
}

#[test_log::test(tokio::test)]
async fn availability_closes_the_day_after_2300() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/centers/1/availability")
        .add_query_param("date", "2026-08-10")
        .add_query_param("time", "23:10")
        .add_query_param("duration", "1")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "No more bookings available today");
}

#[test_log::test(tokio::test)]
async fn availability_closes_the_day_when_duration_no_longer_fits() {
    // At 21:30 the earliest start is 22:00; a four-hour slot would run past
    // midnight, so the day is over for this duration.
    let server = create_test_server();

    let response = server
        .get("/api/v1/centers/1/availability")
        .add_query_param("date", "2026-08-10")
        .add_query_param("time", "2130")
        .add_query_param("duration", "4")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "No more bookings available today");
}

#[test_log::test(tokio::test)]
async fn booking_creation_rejects_out_of_range_hours() {
    let server = create_test_server();

    let cases = [
        (json!({"user_id": 1, "box_id": 1, "date": "2026-08-10", "start_hour": 24, "duration_hours": 1}), "start hour 24"),
        (json!({"user_id": 1, "box_id": 1, "date": "2026-08-10", "start_hour": 10, "duration_hours": 0}), "duration 0"),
        (json!({"user_id": 1, "box_id": 1, "date": "2026-08-10", "start_hour": 10, "duration_hours": 5}), "duration 5"),
        (json!({"user_id": 1, "box_id": 1, "date": "2026-08-10", "start_hour": 22, "duration_hours": 4}), "slot past day end"),
    ];

    for (body, case) in cases {
        let response = server.post("/api/v1/bookings").json(&body).await;
        assert_eq!(response.status_code(), 400, "{case} must be rejected");
    }
}

#[test_log::test(tokio::test)]
async fn schedule_rejects_day_counts_outside_range() {
    let server = create_test_server();

    for days in ["0", "32"] {
        let response = server
            .get("/api/v1/centers/1/boxes/1/schedule")
            .add_query_param("days", days)
            .await;

        assert_eq!(response.status_code(), 400, "days {days} must be rejected");
    }
}

#[test_log::test(tokio::test)]
async fn closing_a_box_requires_closure_hours() {
    let server = create_test_server();

    let response = server
        .patch("/api/v1/centers/1/boxes/1/status")
        .json(&json!({"status": "closed", "user_id": 1}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(response.text().contains("closed_hours"));
}

#[test_log::test(tokio::test)]
async fn closing_a_box_rejects_out_of_range_closure_hours() {
    let server = create_test_server();

    let response = server
        .patch("/api/v1/centers/1/boxes/1/status")
        .json(&json!({"status": "closed", "closed_hours": 9, "user_id": 1}))
        .await;

    assert_eq!(response.status_code(), 400);
}
