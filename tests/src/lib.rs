//! End-to-end scenarios against the reservation core.

mod reservation;
