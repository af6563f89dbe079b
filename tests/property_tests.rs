//! Property-based tests for the reporting invariants: top-k ordering and
//! result bounds, and the available/booked room accounting.

use hoteldesk::commands::reports::{available_rooms, booked_rooms, top_room_prices};
use hoteldesk::test_utils::{hotel_db, seed_booking, seed_room};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn top_k_prices_are_non_increasing_and_bounded(
        prices in proptest::collection::vec(0.0f64..10_000.0, 0..20),
        k in 0i64..25,
    ) {
        let db = hotel_db().unwrap();
        for (i, price) in prices.iter().enumerate() {
            seed_booking(&db, (i + 1) as i64, 1, 1, (i + 1) as i64, "2024-06-10", *price).unwrap();
        }

        let result = top_room_prices(
            &db,
            "2024-06-01".parse().unwrap(),
            "2024-06-30".parse().unwrap(),
            k,
        )
        .unwrap();

        prop_assert!(result.row_count <= k as usize);
        prop_assert!(result.row_count <= prices.len());
        let got: Vec<f64> = result.rows.iter().map(|r| r[6].parse().unwrap()).collect();
        prop_assert!(got.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn available_and_booked_rooms_account_for_the_hotel(
        total_rooms in 1i64..12,
        booked in proptest::collection::btree_set(1i64..12, 0..8),
    ) {
        let db = hotel_db().unwrap();
        for room in 1..=total_rooms {
            seed_room(&db, 1, room, "Standard").unwrap();
        }
        // One booking per distinct room, restricted to rooms that exist
        let booked_rooms_set: Vec<i64> =
            booked.iter().copied().filter(|room| *room <= total_rooms).collect();
        for (i, room) in booked_rooms_set.iter().enumerate() {
            seed_booking(&db, (i + 1) as i64, 1, 1, *room, "2024-06-10", 100.0).unwrap();
        }

        let available: i64 = available_rooms(&db, 1).unwrap().rows[0][0].parse().unwrap();
        let counted: i64 = booked_rooms(&db, 1).unwrap().rows[0][0].parse().unwrap();

        prop_assert_eq!(available, total_rooms - booked_rooms_set.len() as i64);
        prop_assert_eq!(counted, booked_rooms_set.len() as i64);
        prop_assert!(available + counted == total_rooms);
    }
}
