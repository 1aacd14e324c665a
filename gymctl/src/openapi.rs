//! OpenAPI documentation configuration.
//!
//! Aggregates the `utoipa` annotations from the handler modules into one
//! document, rendered at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gymctl",
        description = "Booking and box-reservation API for fitness centers"
    ),
    paths(
        crate::api::handlers::availability::get_center_availability,
        crate::api::handlers::boxes::list_boxes,
        crate::api::handlers::boxes::get_box_schedule,
        crate::api::handlers::boxes::update_box_status,
        crate::api::handlers::boxes::delete_box,
        crate::api::handlers::bookings::create_booking,
        crate::api::handlers::bookings::list_user_bookings,
        crate::api::handlers::bookings::get_booking,
        crate::api::handlers::bookings::delete_booking,
        crate::api::handlers::users::list_center_users,
        crate::api::handlers::users::update_membership,
        crate::api::handlers::users::delete_user,
        crate::api::handlers::stats::get_center_stats,
    ),
    tags(
        (name = "availability", description = "Open-slot computation"),
        (name = "boxes", description = "Box listing, schedules, and status"),
        (name = "bookings", description = "Reservation lifecycle"),
        (name = "users", description = "Member administration"),
        (name = "stats", description = "Dashboard aggregates"),
    )
)]
pub struct ApiDoc;
