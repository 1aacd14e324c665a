//! Slot enumeration and the time-of-day policies.
//!
//! Every call site that needs overlap semantics or a "next bookable hour"
//! goes through the functions here; none carries its own copy of the scan or
//! its own reading of the wall clock. Inputs arrive pre-validated through the
//! types in [`super::models`], so the enumeration itself is total.

use super::models::{
    AvailabilityQuery, BookedHours, ClockTime, DayAvailability, HourOfDay, HourSlot,
};
use crate::types::BoxId;
use std::collections::BTreeMap;

/// Compute every open slot of the requested duration for each box on one day.
///
/// `existing` maps every candidate box to its (possibly empty) booking list
/// for the queried date; boxes absent from the map are not considered at all.
/// A candidate start `s` is open for a box when `[s, s + duration)` intersects
/// none of the box's booked ranges under half-open semantics.
///
/// The result omits boxes with no open slot. When no candidate start exists in
/// the day at all, the distinguished [`DayAvailability::DayClosed`] is
/// returned instead of an empty map.
///
/// Purely computational: same inputs, same output, in the same order
/// (ascending box id, ascending start hour).
#[must_use]
pub fn compute_availability(
    query: AvailabilityQuery,
    existing: &BTreeMap<BoxId, Vec<BookedHours>>,
) -> DayAvailability {
    let Some(latest_start) = query.latest_start() else {
        return DayAvailability::DayClosed;
    };

    let duration = query.duration.hours();
    let mut open: BTreeMap<BoxId, Vec<HourSlot>> = BTreeMap::new();

    for (&box_id, bookings) in existing {
        let slots: Vec<HourSlot> = (query.earliest_start.get()..=latest_start.get())
            .map(|start| HourSlot { start_hour: start, end_hour: start + duration })
            .filter(|slot| {
                bookings
                    .iter()
                    .all(|booked| !booked.overlaps(slot.start_hour, slot.end_hour))
            })
            .collect();

        if !slots.is_empty() {
            open.insert(box_id, slots);
        }
    }

    DayAvailability::Open(open)
}

/// The earliest hour a new booking may start, given the current time of day.
///
/// Bookings start on whole hours, so the first eligible start is the next
/// full hour; once the clock reads 23:00 or later there is none left today.
#[must_use]
pub fn first_open_hour(now: ClockTime) -> Option<HourOfDay> {
    HourOfDay::new(now.hour().get() + 1).ok()
}

/// Round the current time to the nearest whole hour, for workflows that act
/// "now" (closing a box books it out from the surrounding hour).
///
/// Minutes `>= 30` round up, so the result may be [`DAY_END_HOUR`] (24),
/// meaning the day has no remaining whole hour.
#[must_use]
pub fn nearest_hour(now: ClockTime) -> u8 {
    if now.minute() >= 30 {
        now.hour().get() + 1
    } else {
        now.hour().get()
    }
}

/// Per-hour occupancy of one box-day: for each hour `0..24`, the index into
/// `bookings` of the booking covering it, if any.
///
/// Inputs satisfying the no-overlap invariant mark each hour at most once;
/// should overlapping rows ever be supplied, the later row wins, which keeps
/// the function total without privileging any call site's tie-break.
#[must_use]
pub fn hourly_occupancy(bookings: &[BookedHours]) -> [Option<usize>; 24] {
    let mut grid = [None; 24];
    for (idx, booked) in bookings.iter().enumerate() {
        for hour in booked.start_hour..booked.end_hour() {
            grid[usize::from(hour)] = Some(idx);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::models::{Error, SlotDuration, DAY_END_HOUR};
    use proptest::prelude::*;

    fn query(earliest: u8, duration: u8) -> AvailabilityQuery {
        AvailabilityQuery::new(
            HourOfDay::new(earliest).unwrap(),
            SlotDuration::new(duration).unwrap(),
        )
    }

    fn slots_of(result: &DayAvailability, box_id: BoxId) -> Vec<(u8, u8)> {
        match result {
            DayAvailability::Open(map) => map
                .get(&box_id)
                .map(|slots| slots.iter().map(|s| (s.start_hour, s.end_hour)).collect())
                .unwrap_or_default(),
            DayAvailability::DayClosed => panic!("expected open day"),
        }
    }

    #[test]
    fn free_day_enumerates_every_start() {
        let existing = BTreeMap::from([(1, vec![])]);
        let result = compute_availability(query(0, 4), &existing);

        let expected: Vec<(u8, u8)> = (0..=20).map(|s| (s, s + 4)).collect();
        assert_eq!(slots_of(&result, 1), expected);
        assert_eq!(expected.len(), 21);
    }

    #[test]
    fn booked_range_excludes_overlapping_candidates() {
        // Booking covers [10, 12). With duration 2 and earliest 8, the starts
        // 9, 10 and 11 all intersect it.
        let existing = BTreeMap::from([(7, vec![BookedHours::new(10, 2)])]);
        let result = compute_availability(query(8, 2), &existing);

        let slots = slots_of(&result, 7);
        assert!(slots.contains(&(8, 10)));
        assert!(slots.contains(&(12, 14)));
        assert!(slots.contains(&(22, 24)));
        for blocked in [(9, 11), (10, 12), (11, 13)] {
            assert!(!slots.contains(&blocked), "{blocked:?} overlaps [10,12)");
        }
        let expected: Vec<(u8, u8)> = std::iter::once((8, 10))
            .chain((12..=22).map(|s| (s, s + 2)))
            .collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn back_to_back_bookings_are_not_overlaps() {
        // [10,12) and a candidate [12,14) share only the boundary hour mark.
        let existing = BTreeMap::from([(1, vec![BookedHours::new(10, 2)])]);
        let result = compute_availability(query(12, 2), &existing);
        assert_eq!(slots_of(&result, 1)[0], (12, 14));
    }

    #[test]
    fn last_hour_single_slot_boundary() {
        let existing = BTreeMap::from([(1, vec![])]);
        let result = compute_availability(query(23, 1), &existing);
        assert_eq!(slots_of(&result, 1), vec![(23, 24)]);
    }

    #[test]
    fn last_hour_with_longer_duration_closes_the_day() {
        let existing = BTreeMap::from([(1, vec![])]);
        let result = compute_availability(query(23, 2), &existing);
        assert_eq!(result, DayAvailability::DayClosed);
    }

    #[test]
    fn day_closed_even_with_no_boxes() {
        let result = compute_availability(query(22, 4), &BTreeMap::new());
        assert_eq!(result, DayAvailability::DayClosed);
    }

    #[test]
    fn fully_booked_box_is_omitted_from_result() {
        let existing = BTreeMap::from([
            // Box 1 is blocked all day in 4-hour stretches.
            (1, vec![
                BookedHours::new(0, 4),
                BookedHours::new(4, 4),
                BookedHours::new(8, 4),
                BookedHours::new(12, 4),
                BookedHours::new(16, 4),
                BookedHours::new(20, 4),
            ]),
            (2, vec![]),
        ]);
        let result = compute_availability(query(0, 2), &existing);

        match &result {
            DayAvailability::Open(map) => {
                assert!(!map.contains_key(&1));
                assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2]);
            }
            DayAvailability::DayClosed => panic!("expected open day"),
        }
    }

    #[test]
    fn empty_input_map_yields_empty_open_result() {
        let result = compute_availability(query(8, 1), &BTreeMap::new());
        assert_eq!(result, DayAvailability::Open(BTreeMap::new()));
    }

    #[test]
    fn result_is_deterministic_across_calls() {
        let existing = BTreeMap::from([
            (3, vec![BookedHours::new(6, 3)]),
            (1, vec![BookedHours::new(14, 2)]),
            (2, vec![]),
        ]);
        let q = query(5, 3);
        let first = compute_availability(q, &existing);
        let second = compute_availability(q, &existing);
        assert_eq!(first, second);

        match first {
            DayAvailability::Open(map) => {
                assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            }
            DayAvailability::DayClosed => panic!("expected open day"),
        }
    }

    #[test]
    fn invalid_duration_is_rejected_at_construction() {
        assert_eq!(SlotDuration::new(5), Err(Error::InvalidDuration(5)));
        assert_eq!(SlotDuration::new(0), Err(Error::InvalidDuration(0)));
        assert_eq!(HourOfDay::new(24), Err(Error::InvalidHour(24)));
    }

    #[test]
    fn first_open_hour_rounds_up_and_caps_at_day_end() {
        let at = |h, m| ClockTime::new(h, m).unwrap();
        assert_eq!(first_open_hour(at(9, 0)), Some(HourOfDay::new(10).unwrap()));
        assert_eq!(first_open_hour(at(9, 59)), Some(HourOfDay::new(10).unwrap()));
        assert_eq!(first_open_hour(at(22, 30)), Some(HourOfDay::new(23).unwrap()));
        assert_eq!(first_open_hour(at(23, 0)), None);
        assert_eq!(first_open_hour(at(23, 59)), None);
    }

    #[test]
    fn nearest_hour_rounds_on_the_half() {
        let at = |h, m| ClockTime::new(h, m).unwrap();
        assert_eq!(nearest_hour(at(10, 0)), 10);
        assert_eq!(nearest_hour(at(10, 29)), 10);
        assert_eq!(nearest_hour(at(10, 30)), 11);
        assert_eq!(nearest_hour(at(23, 45)), 24);
    }

    #[test]
    fn clock_time_parses_both_wire_formats() {
        assert_eq!("08:15".parse::<ClockTime>().unwrap(), ClockTime::new(8, 15).unwrap());
        assert_eq!("0815".parse::<ClockTime>().unwrap(), ClockTime::new(8, 15).unwrap());
        assert_eq!("2359".parse::<ClockTime>().unwrap(), ClockTime::new(23, 59).unwrap());

        for bad in ["24:00", "12:60", "8:15", "081", "08155", "ab:cd", "", "12-30"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn occupancy_grid_marks_covered_hours() {
        let bookings = [BookedHours::new(10, 2), BookedHours::new(21, 3)];
        let grid = hourly_occupancy(&bookings);

        assert_eq!(grid[9], None);
        assert_eq!(grid[10], Some(0));
        assert_eq!(grid[11], Some(0));
        assert_eq!(grid[12], None);
        assert_eq!(grid[21], Some(1));
        assert_eq!(grid[23], Some(1));
    }

    #[test]
    fn occupancy_grid_clips_at_day_end() {
        // A truncated closure stored as start 23 / duration 4 only covers 23.
        let grid = hourly_occupancy(&[BookedHours::new(23, 4)]);
        assert_eq!(grid[22], None);
        assert_eq!(grid[23], Some(0));
    }

    fn arb_booking() -> impl Strategy<Value = BookedHours> {
        (0u8..24, 1u8..=4).prop_map(|(start, duration)| BookedHours::new(start, duration))
    }

    proptest! {
        #[test]
        fn no_returned_slot_overlaps_an_existing_booking(
            bookings in prop::collection::vec(arb_booking(), 0..12),
            earliest in 0u8..24,
            duration in 1u8..=4,
        ) {
            let existing = BTreeMap::from([(1, bookings.clone())]);
            if let DayAvailability::Open(map) = compute_availability(query(earliest, duration), &existing) {
                for slot in map.get(&1).map(Vec::as_slice).unwrap_or_default() {
                    for booked in &bookings {
                        prop_assert!(
                            !booked.overlaps(slot.start_hour, slot.end_hour),
                            "slot [{},{}) overlaps booking [{},{})",
                            slot.start_hour, slot.end_hour, booked.start_hour, booked.end_hour(),
                        );
                    }
                }
            }
        }

        #[test]
        fn every_slot_respects_duration_and_bounds(
            bookings in prop::collection::vec(arb_booking(), 0..12),
            earliest in 0u8..24,
            duration in 1u8..=4,
        ) {
            let existing = BTreeMap::from([(1, bookings)]);
            if let DayAvailability::Open(map) = compute_availability(query(earliest, duration), &existing) {
                for slot in map.get(&1).map(Vec::as_slice).unwrap_or_default() {
                    prop_assert_eq!(slot.end_hour - slot.start_hour, duration);
                    prop_assert!(slot.start_hour >= earliest);
                    prop_assert!(slot.end_hour <= DAY_END_HOUR);
                }
            }
        }

        #[test]
        fn slots_are_strictly_ascending(
            bookings in prop::collection::vec(arb_booking(), 0..12),
            earliest in 0u8..24,
            duration in 1u8..=4,
        ) {
            let existing = BTreeMap::from([(1, bookings)]);
            if let DayAvailability::Open(map) = compute_availability(query(earliest, duration), &existing) {
                if let Some(slots) = map.get(&1) {
                    prop_assert!(slots.windows(2).all(|w| w[0].start_hour < w[1].start_hour));
                }
            }
        }

        #[test]
        fn day_closed_exactly_when_no_candidate_start_fits(
            earliest in 0u8..24,
            duration in 1u8..=4,
        ) {
            let existing = BTreeMap::from([(1, vec![])]);
            let closed = compute_availability(query(earliest, duration), &existing).is_closed();
            prop_assert_eq!(closed, earliest > DAY_END_HOUR - duration);
        }
    }
}
