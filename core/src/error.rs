use thiserror::Error;

use crate::seat::SeatId;

/// Rule violations raised by [`crate::Room`] and [`crate::Seat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("El asiento {0} ya está registrado.")]
    DuplicateSeat(SeatId),
    #[error("El asiento {0} no existe.")]
    SeatNotFound(SeatId),
    #[error("El asiento {0} ya está reservado.")]
    AlreadyReserved(SeatId),
    #[error("El asiento {0} no está reservado.")]
    NotReserved(SeatId),
}

impl ReservationError {
    pub fn seat(&self) -> SeatId {
        match self {
            Self::DuplicateSeat(id)
            | Self::SeatNotFound(id)
            | Self::AlreadyReserved(id)
            | Self::NotReserved(id) => *id,
        }
    }
}
