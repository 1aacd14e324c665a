//! API models for availability queries.

use crate::scheduling::{DayAvailability, HourOfDay, HourSlot, SlotDuration};
use crate::types::BoxId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the availability endpoint.
///
/// `time` is the client's current wall clock ("HH:MM" or "HHMM"); the first
/// bookable hour is derived from it server-side so clients cannot ask for
/// slots in the past. Range validation happens in the handler against the
/// scheduling types — nothing here is clamped.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AvailabilityQueryParams {
    /// Day to check, as an ISO date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Current time of day, "HH:MM" or "HHMM"
    pub time: String,
    /// Requested booking length in hours (1-4)
    pub duration: u8,
}

/// Availability for one day across a center's boxes.
///
/// Either the per-box open slots, or the explicit day-closed message when no
/// start hour remains — deliberately not just an empty map, so clients can
/// distinguish "come back tomorrow" from "everything is taken".
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AvailabilityResponse {
    Open {
        /// Earliest hour a booking may start
        next_open_hour: u8,
        /// Slot length the query asked for
        duration_hours: u8,
        /// Open slots per box id, ascending; fully-booked boxes are omitted
        boxes: BTreeMap<BoxId, Vec<HourSlot>>,
    },
    DayClosed { message: String },
}

impl AvailabilityResponse {
    pub fn day_closed() -> Self {
        AvailabilityResponse::DayClosed {
            message: "No more bookings available today".to_string(),
        }
    }

    /// Assemble the response from the engine's result.
    pub fn from_engine(
        next_open_hour: HourOfDay,
        duration: SlotDuration,
        availability: DayAvailability,
    ) -> Self {
        match availability {
            DayAvailability::DayClosed => Self::day_closed(),
            DayAvailability::Open(boxes) => AvailabilityResponse::Open {
                next_open_hour: next_open_hour.get(),
                duration_hours: duration.hours(),
                boxes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_response_serializes_box_map_with_string_keys() {
        let boxes = BTreeMap::from([(2, vec![HourSlot { start_hour: 8, end_hour: 10 }])]);
        let response = AvailabilityResponse::Open {
            next_open_hour: 8,
            duration_hours: 2,
            boxes,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["next_open_hour"], 8);
        assert_eq!(json["boxes"]["2"][0]["start_hour"], 8);
        assert_eq!(json["boxes"]["2"][0]["end_hour"], 10);
    }

    #[test]
    fn day_closed_response_is_a_message_body() {
        let json = serde_json::to_value(AvailabilityResponse::day_closed()).unwrap();
        assert_eq!(json["message"], "No more bookings available today");
        assert!(json.get("boxes").is_none());
    }
}
