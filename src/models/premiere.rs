use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::models::{Movie, Theater};

/// Booking state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeatStatus {
    Available,
    Booked,
}

/// One scheduled showing of one movie at one theater, with its own seat map.
///
/// The premiere references its theater and movie by id; the registry keeps
/// the records themselves. Seat index `i` (0-based) is seat number `i + 1`
/// (1-based, user-facing).
///
/// Each premiere carries its own mutex, so bookings on unrelated premieres
/// never serialize against each other.
#[derive(Debug)]
pub struct Premiere {
    pub theater_id: u64,
    pub movie_id: u64,
    seats: Mutex<[SeatStatus; Theater::SEAT_CAPACITY]>,
}

impl Premiere {
    /// Creates the premiere with every seat available.
    pub fn new(theater: &Theater, movie: &Movie) -> Self {
        Premiere {
            theater_id: theater.id,
            movie_id: movie.id,
            seats: Mutex::new([SeatStatus::Available; Theater::SEAT_CAPACITY]),
        }
    }

    // Nothing can panic while the guard is held, so a poisoned lock still
    // carries a consistent seat map.
    fn seats(&self) -> MutexGuard<'_, [SeatStatus; Theater::SEAT_CAPACITY]> {
        self.seats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the 1-based numbers of the seats currently available, in
    /// ascending order.
    pub fn seats_available(&self) -> Vec<u16> {
        let seats = self.seats();
        seats
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == SeatStatus::Available)
            .map(|(idx, _)| idx as u16 + 1)
            .collect()
    }

    /// Books every requested seat, or none of them.
    ///
    /// Works on a copy of the seat map: each requested transition is
    /// validated and applied on the copy, and the copy is published as the
    /// new state only when all of them succeed. Any out-of-range seat,
    /// already-booked seat, or seat listed twice in the same request (the
    /// second application sees it Booked on the copy) fails the whole
    /// request, leaving the seat map untouched.
    ///
    /// Two concurrent calls for overlapping seats cannot both succeed:
    /// whichever enters the exclusive region first wins.
    pub fn book_seats(&self, seats_to_book: &[u16]) -> bool {
        let mut seats = self.seats();

        let mut candidate = *seats;
        for &seat_num in seats_to_book {
            if seat_num == 0 || seat_num as usize > Theater::SEAT_CAPACITY {
                return false;
            }
            let seat_idx = seat_num as usize - 1;
            if candidate[seat_idx] == SeatStatus::Booked {
                return false;
            }
            candidate[seat_idx] = SeatStatus::Booked;
        }

        *seats = candidate;
        true
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::registry::Entity;

    fn premiere() -> Premiere {
        let theater = Theater::with_id(1, "4DX".into());
        let movie = Movie::with_id(1, "Fight Club".into());
        Premiere::new(&theater, &movie)
    }

    fn all_seats() -> Vec<u16> {
        (1..=Theater::SEAT_CAPACITY as u16).collect()
    }

    #[test]
    fn new_premiere_has_every_seat_available() {
        assert_eq!(premiere().seats_available(), all_seats());
    }

    #[test]
    fn booking_removes_seats_from_availability() {
        let premiere = premiere();
        assert!(premiere.book_seats(&[1, 2, 3]));
        assert_eq!(premiere.seats_available(), (4..=20).collect::<Vec<u16>>());
    }

    #[test]
    fn rebooking_the_same_seats_fails_without_side_effects() {
        let premiere = premiere();
        assert!(premiere.book_seats(&[1, 2, 3]));

        let before = premiere.seats_available();
        assert!(!premiere.book_seats(&[1, 2, 3]));
        assert_eq!(premiere.seats_available(), before);
    }

    #[test]
    fn out_of_range_seat_fails_the_whole_request() {
        let premiere = premiere();
        assert!(!premiere.book_seats(&[1, 2, 21]));
        assert!(!premiere.book_seats(&[0]));
        assert_eq!(premiere.seats_available(), all_seats());
    }

    #[test]
    fn duplicate_seat_in_one_request_fails_the_whole_request() {
        let premiere = premiere();
        assert!(!premiere.book_seats(&[5, 6, 5]));
        assert_eq!(premiere.seats_available(), all_seats());
    }

    #[test]
    fn one_booked_seat_poisons_an_otherwise_valid_request() {
        let premiere = premiere();
        assert!(premiere.book_seats(&[10]));

        assert!(!premiere.book_seats(&[9, 10, 11]));
        let available = premiere.seats_available();
        assert!(available.contains(&9));
        assert!(available.contains(&11));
        assert!(!available.contains(&10));
    }

    #[test]
    fn empty_request_books_nothing_and_succeeds() {
        let premiere = premiere();
        assert!(premiere.book_seats(&[]));
        assert_eq!(premiere.seats_available(), all_seats());
    }

    #[test]
    fn availability_and_booked_seats_partition_the_seat_map() {
        let premiere = premiere();
        assert!(premiere.book_seats(&[2, 4, 6, 8]));

        let available = premiere.seats_available();
        assert!(available.len() <= Theater::SEAT_CAPACITY);

        let mut union: Vec<u16> = available;
        union.extend([2, 4, 6, 8]);
        union.sort_unstable();
        assert_eq!(union, all_seats());
    }

    proptest! {
        // Whatever the request, either it fails and availability is
        // untouched, or it succeeds and exactly the requested seats are
        // gone from availability.
        #[test]
        fn booking_is_all_or_nothing(
            prebooked in proptest::collection::vec(1u16..=20, 0..6),
            request in proptest::collection::vec(0u16..=25, 0..8),
        ) {
            let premiere = premiere();
            for seat in &prebooked {
                let _ = premiere.book_seats(std::slice::from_ref(seat));
            }

            let before = premiere.seats_available();
            let booked = premiere.book_seats(&request);
            let after = premiere.seats_available();

            if booked {
                let expected: Vec<u16> = before
                    .iter()
                    .copied()
                    .filter(|seat| !request.contains(seat))
                    .collect();
                prop_assert_eq!(after, expected);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
