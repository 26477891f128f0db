use tracing::{debug, info, warn};

use cine_common::config::DEFAULT_CURRENCY;

use crate::error::ReservationError;
use crate::pricing::{self, Discount, Quote};
use crate::seat::{Seat, SeatId};

/// Outcome of a successful [`Room::reserve_seat`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub seat: SeatId,
    pub base_price: f64,
    pub final_price: f64,
    pub discounts: Vec<Discount>,
    /// Day exactly as the customer typed it.
    pub day: String,
}

/// The cinema room: a base ticket price and its seats in creation order.
///
/// Lookups are linear scans. Seat counts are small and fixed, and
/// [`Room::add_seat`] keeps `(row, number)` unique so a scan finds at most
/// one match.
#[derive(Debug, Clone)]
pub struct Room {
    base_price: f64,
    currency: String,
    seats: Vec<Seat>,
}

impl Room {
    /// `base_price` must be finite and non-negative; settings coming from
    /// the command line are checked by `Config::validate` first.
    pub fn new(base_price: f64) -> Self {
        debug_assert!(
            base_price.is_finite() && base_price >= 0.0,
            "base price must be non-negative, got {base_price}"
        );
        Self {
            base_price,
            currency: DEFAULT_CURRENCY.to_string(),
            seats: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_reserved()).count()
    }

    pub fn add_seat(&mut self, number: u32, row: char) -> Result<(), ReservationError> {
        if self.find_seat(number, row).is_some() {
            let err = ReservationError::DuplicateSeat(SeatId::new(row, number));
            warn!(seat = %err.seat(), "{err}");
            return Err(err);
        }
        self.seats.push(Seat::new(number, row));
        debug!("Added seat {row}-{number}");
        Ok(())
    }

    pub fn find_seat(&self, number: u32, row: char) -> Option<&Seat> {
        self.seats.iter().find(|s| s.matches(number, row))
    }

    fn find_seat_mut(&mut self, number: u32, row: char) -> Result<&mut Seat, ReservationError> {
        self.seats
            .iter_mut()
            .find(|s| s.matches(number, row))
            .ok_or(ReservationError::SeatNotFound(SeatId::new(row, number)))
    }

    /// Prices a ticket without touching any seat.
    pub fn compute_price(&self, day: &str, age: i32) -> Quote {
        pricing::quote(self.base_price, day, age)
    }

    pub fn reserve_seat(
        &mut self,
        number: u32,
        row: char,
        day: &str,
        age: i32,
    ) -> Result<Reservation, ReservationError> {
        let quote = self.compute_price(day, age);
        let seat = self
            .find_seat_mut(number, row)
            .inspect_err(|e| warn!(seat = %e.seat(), "{e}"))?;

        seat.reserve(quote.final_price, quote.discounts.clone(), day)
            .inspect_err(|e| warn!(seat = %e.seat(), "{e}"))?;

        info!(
            "Reserved seat {} for {:.2} with {} discount(s)",
            seat.id(),
            quote.final_price,
            quote.discounts.len()
        );

        Ok(Reservation {
            seat: seat.id(),
            base_price: quote.base_price,
            final_price: quote.final_price,
            discounts: quote.discounts,
            day: day.to_string(),
        })
    }

    pub fn cancel_reservation(&mut self, number: u32, row: char) -> Result<(), ReservationError> {
        let seat = self
            .find_seat_mut(number, row)
            .inspect_err(|e| warn!(seat = %e.seat(), "{e}"))?;
        seat.cancel().inspect_err(|e| warn!(seat = %e.seat(), "{e}"))?;
        info!("Cancelled reservation for seat {}", seat.id());
        Ok(())
    }

    /// Status lines for every seat in creation order.
    pub fn list_seats(&self) -> Vec<String> {
        self.seats
            .iter()
            .map(|seat| seat.describe(&self.currency))
            .collect()
    }
}
