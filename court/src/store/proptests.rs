//! Property-based tests for `ReservationStore` invariants.

use super::{next_probe, ReservationStore};
use crate::clock::FixedClock;
use crate::policy::BookingPolicy;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn store() -> ReservationStore<FixedClock> {
    let policy = BookingPolicy::default().with_weekly_limit(usize::MAX);
    ReservationStore::with_clock(policy, FixedClock::new(base()))
}

// Requests land on a 15-minute grid across one week, at least an hour ahead.
fn request_strategy() -> impl Strategy<Value = (String, NaiveDateTime, Duration)> {
    (
        prop::sample::select(vec!["Alice", "Bob", "Carol", "Dave"]),
        4i64..(7 * 24 * 4),
        1i64..12,
    )
        .prop_map(|(holder, quarter, len)| {
            (
                holder.to_string(),
                base() + Duration::minutes(quarter * 15),
                Duration::minutes(len * 15),
            )
        })
}

fn assert_no_overlaps(store: &ReservationStore<FixedClock>) {
    let all = store.reservations();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(
                !a.overlaps(b.start(), b.end()),
                "{a:?} overlaps {b:?}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // No two stored reservations ever overlap, whatever the request order.
    #[test]
    fn stored_reservations_never_overlap(requests in prop::collection::vec(request_strategy(), 1..40)) {
        let mut store = store();
        for (holder, start, duration) in requests {
            let _ = store.add_reservation(&holder, start, duration);
            assert_no_overlaps(&store);
        }
    }

    // A successful add followed by a cancel leaves the store as it was.
    #[test]
    fn add_then_cancel_is_net_zero(
        existing in prop::collection::vec(request_strategy(), 0..15),
        (holder, start, duration) in request_strategy(),
    ) {
        let mut store = store();
        for (h, s, d) in existing {
            let _ = store.add_reservation(&h, s, d);
        }
        let before = store.reservations().to_vec();

        if store.add_reservation(&holder, start, duration).is_ok() {
            store.cancel_reservation(&holder, start).unwrap();
        }
        prop_assert_eq!(store.reservations(), before.as_slice());
    }

    // The next-slot search returns a free slot and skips no free grid point.
    #[test]
    fn next_available_is_earliest_free_probe(
        existing in prop::collection::vec(request_strategy(), 0..20),
        offset in 0i64..(5 * 24 * 60),
        len in 1i64..8,
    ) {
        let mut store = store();
        for (h, s, d) in existing {
            let _ = store.add_reservation(&h, s, d);
        }
        let from = base() + Duration::minutes(offset);
        let duration = Duration::minutes(len * 15);

        let found = store.find_next_available(from, duration).unwrap();
        prop_assert!(found >= from);
        prop_assert!(store.is_available(found, duration));

        let mut probe = from;
        while probe < found {
            prop_assert!(!store.is_available(probe, duration));
            probe = next_probe(probe, store.policy().probe_step()).unwrap();
        }
        prop_assert_eq!(probe, found);
    }

    // Availability agrees with a direct interval check against every booking.
    #[test]
    fn availability_matches_brute_force(
        existing in prop::collection::vec(request_strategy(), 0..20),
        (_, start, duration) in request_strategy(),
    ) {
        let mut store = store();
        for (h, s, d) in existing {
            let _ = store.add_reservation(&h, s, d);
        }
        let end = start + duration;
        let expected = store
            .reservations()
            .iter()
            .all(|r| r.end() <= start || end <= r.start());
        prop_assert_eq!(store.is_available(start, duration), expected);
    }
}
