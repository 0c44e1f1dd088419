#[cfg(test)]
mod tests {
    use crate::slots::{calculate_day_slots, AvailabilityWindow, Booking, SlotStatus};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
    use proptest::prelude::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 3).unwrap()
    }

    fn other_day_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn time(minutes: i64) -> NaiveTime {
        NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0).unwrap()
    }

    fn minutes(t: NaiveTime) -> i64 {
        t.hour() as i64 * 60 + t.minute() as i64
    }

    // Strategy for windows as (start, length) minute pairs within one day.
    fn windows_strategy() -> impl Strategy<Value = Vec<AvailabilityWindow>> {
        prop::collection::vec((0i64..20 * 60, 1i64..4 * 60), 0..4).prop_map(|raw| {
            raw.into_iter()
                .map(|(start, len)| AvailabilityWindow {
                    date: day(),
                    start: time(start),
                    end: time((start + len).min(24 * 60 - 1)),
                })
                .collect()
        })
    }

    fn bookings_strategy() -> impl Strategy<Value = Vec<Booking>> {
        prop::collection::vec((0i64..22 * 60, 1i64..2 * 60), 0..5).prop_map(|raw| {
            raw.into_iter()
                .map(|(start, len)| Booking {
                    date: day(),
                    start: time(start),
                    end: time((start + len).min(24 * 60 - 1)),
                })
                .collect()
        })
    }

    proptest! {
        // Every slot has exactly the requested duration and sits inside a window.
        #[test]
        fn test_slots_have_duration_and_fit_a_window(
            windows in windows_strategy(),
            bookings in bookings_strategy(),
            duration in 5i64..120,
        ) {
            let slots =
                calculate_day_slots(day(), duration, &windows, &bookings, other_day_now()).unwrap();

            for slot in &slots {
                prop_assert_eq!(minutes(slot.end) - minutes(slot.start), duration);
                let contained = windows.iter().any(|w| {
                    w.date == day() && w.start <= slot.start && slot.end <= w.end
                });
                prop_assert!(contained, "slot {:?} outside every window", slot);
            }
        }

        // Occupied tagging agrees with the open-interval overlap test.
        #[test]
        fn test_status_matches_overlap(
            windows in windows_strategy(),
            bookings in bookings_strategy(),
            duration in 5i64..120,
        ) {
            let slots =
                calculate_day_slots(day(), duration, &windows, &bookings, other_day_now()).unwrap();

            for slot in &slots {
                let overlapping = bookings.iter().any(|b| {
                    minutes(slot.start) < minutes(b.end) && minutes(b.start) < minutes(slot.end)
                });
                let expected = if overlapping {
                    SlotStatus::Occupied
                } else {
                    SlotStatus::Bookable
                };
                prop_assert_eq!(slot.status, expected);
            }
        }

        // Output ordering is ascending by start, and every slot is bookable
        // when there are no bookings at all.
        #[test]
        fn test_sorted_and_all_bookable_without_bookings(
            windows in windows_strategy(),
            duration in 5i64..120,
        ) {
            let slots =
                calculate_day_slots(day(), duration, &windows, &[], other_day_now()).unwrap();

            for pair in slots.windows(2) {
                prop_assert!(pair[0].start <= pair[1].start);
            }
            prop_assert!(slots.iter().all(|s| s.status == SlotStatus::Bookable));
        }

        // On the current date no slot starts before "now".
        #[test]
        fn test_no_past_slot_today(
            windows in windows_strategy(),
            duration in 5i64..120,
            now_minutes in 0i64..24 * 60,
        ) {
            let now = day().and_hms_opt((now_minutes / 60) as u32, (now_minutes % 60) as u32, 0)
                .unwrap();
            let slots = calculate_day_slots(day(), duration, &windows, &[], now).unwrap();

            for slot in &slots {
                prop_assert!(minutes(slot.start) >= now_minutes,
                    "slot {:?} starts before now ({})", slot, now_minutes);
            }
        }

        // Same inputs, same output: the computation is pure.
        #[test]
        fn test_idempotent(
            windows in windows_strategy(),
            bookings in bookings_strategy(),
            duration in 5i64..120,
        ) {
            let first =
                calculate_day_slots(day(), duration, &windows, &bookings, other_day_now()).unwrap();
            let second =
                calculate_day_slots(day(), duration, &windows, &bookings, other_day_now()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
