use std::fmt;

use crate::error::ReservationError;
use crate::pricing::Discount;

/// Row letter plus seat number, rendered as `A-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    pub row: char,
    pub number: u32,
}

impl SeatId {
    pub fn new(row: char, number: u32) -> Self {
        Self { row, number }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.number)
    }
}

/// A single seat of the room.
///
/// While unreserved the price is zero, there are no discounts and no
/// reservation day. [`Seat::reserve`] and [`Seat::cancel`] are the only
/// ways to move between the two states.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    id: SeatId,
    reserved: bool,
    price: f64,
    applied_discounts: Vec<Discount>,
    reservation_day: Option<String>,
}

impl Seat {
    pub fn new(number: u32, row: char) -> Self {
        Self {
            id: SeatId::new(row, number),
            reserved: false,
            price: 0.0,
            applied_discounts: Vec::new(),
            reservation_day: None,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn number(&self) -> u32 {
        self.id.number
    }

    pub fn row(&self) -> char {
        self.id.row
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn applied_discounts(&self) -> &[Discount] {
        &self.applied_discounts
    }

    pub fn reservation_day(&self) -> Option<&str> {
        self.reservation_day.as_deref()
    }

    pub fn matches(&self, number: u32, row: char) -> bool {
        self.id.number == number && self.id.row == row
    }

    pub fn reserve(
        &mut self,
        price: f64,
        discounts: Vec<Discount>,
        day: impl Into<String>,
    ) -> Result<(), ReservationError> {
        if self.reserved {
            return Err(ReservationError::AlreadyReserved(self.id));
        }
        self.reserved = true;
        self.price = price;
        self.applied_discounts = discounts;
        self.reservation_day = Some(day.into());
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        if !self.reserved {
            return Err(ReservationError::NotReserved(self.id));
        }
        self.reserved = false;
        self.price = 0.0;
        self.applied_discounts.clear();
        self.reservation_day = None;
        Ok(())
    }

    /// One line of status, plus a second line listing discounts if any
    /// were applied.
    pub fn describe(&self, currency: &str) -> String {
        if !self.reserved {
            return format!("Asiento {}: Disponible", self.id);
        }

        let mut text = format!(
            "Asiento {}: Reservado, Precio: {:.2}{}, Día de reserva: {}",
            self.id,
            self.price,
            currency,
            self.reservation_day.as_deref().unwrap_or_default()
        );
        if !self.applied_discounts.is_empty() {
            let labels: Vec<&str> = self.applied_discounts.iter().map(Discount::label).collect();
            text.push_str("\n   Descuentos aplicados: ");
            text.push_str(&labels.join(", "));
        }
        text
    }
}
