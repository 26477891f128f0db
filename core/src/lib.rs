//! Seat and room model for a single cinema room.
//!
//! * [`seat`]: a reservable seat and its reservation state.
//! * [`room`]: the ordered seat collection, lookup and booking operations.
//! * [`pricing`]: discount rules and price quotes.
//! * [`layout`]: row/number grid used to populate a room.
//! * [`error`]: the domain error taxonomy.

pub mod error;
pub mod layout;
pub mod pricing;
pub mod room;
pub mod seat;

pub use error::ReservationError;
pub use layout::SeatLayout;
pub use pricing::{Discount, Quote};
pub use room::{Reservation, Room};
pub use seat::{Seat, SeatId};
