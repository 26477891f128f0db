#![cfg(test)]
use cine_common::config::Config;
use cine_core::{Discount, ReservationError, Room, SeatId, SeatLayout};

fn reference_room() -> Room {
    Room::from_config(&Config::default()).expect("reference layout has no duplicates")
}

/// Reserve, double reserve, cancel, double cancel on seat A-1.
#[test]
fn reservation_lifecycle_on_reference_room() {
    let mut room = reference_room();
    assert_eq!(room.len(), 15);

    let reservation = room
        .reserve_seat(1, 'A', "miercoles", 10)
        .expect("A-1 is free");
    assert!((reservation.final_price - 8.0).abs() < 1e-9);
    assert_eq!(reservation.discounts, vec![Discount::SpectatorDay]);
    assert_eq!(reservation.day, "miercoles");

    assert_eq!(
        room.reserve_seat(1, 'A', "miercoles", 10),
        Err(ReservationError::AlreadyReserved(SeatId::new('A', 1)))
    );

    assert_eq!(room.cancel_reservation(1, 'A'), Ok(()));

    assert_eq!(
        room.cancel_reservation(1, 'A'),
        Err(ReservationError::NotReserved(SeatId::new('A', 1)))
    );
}

#[test]
fn every_seat_starts_unreserved() {
    let room = reference_room();
    for seat in room.seats() {
        assert!(!seat.is_reserved(), "{} should be free", seat.id());
        assert_eq!(seat.price(), 0.0);
        assert!(seat.applied_discounts().is_empty());
        assert!(seat.reservation_day().is_none());
    }
    assert_eq!(room.available_count(), room.len());
}

#[test]
fn cancel_restores_seat_to_initial_state() {
    let mut room = reference_room();
    let before = room.find_seat(4, 'B').cloned().unwrap();

    room.reserve_seat(4, 'B', "Miércoles", 80).unwrap();
    room.cancel_reservation(4, 'B').unwrap();

    assert_eq!(room.find_seat(4, 'B'), Some(&before));
}

#[test]
fn unknown_seats_are_never_invented() {
    let mut room = reference_room();

    assert!(room.find_seat(6, 'A').is_none());
    assert!(room.find_seat(1, 'D').is_none());
    assert!(room.find_seat(0, 'A').is_none());

    assert_eq!(
        room.reserve_seat(6, 'A', "lunes", 30),
        Err(ReservationError::SeatNotFound(SeatId::new('A', 6)))
    );
    assert_eq!(
        room.cancel_reservation(1, 'D'),
        Err(ReservationError::SeatNotFound(SeatId::new('D', 1)))
    );
    assert_eq!(room.len(), 15);
}

#[test]
fn duplicate_seat_does_not_change_room() {
    let mut room = reference_room();
    let listing = room.list_seats();

    assert_eq!(
        room.add_seat(5, 'C'),
        Err(ReservationError::DuplicateSeat(SeatId::new('C', 5)))
    );
    assert_eq!(room.list_seats(), listing);
}

#[test]
fn already_reserved_regardless_of_discounts() {
    let mut room = reference_room();
    room.reserve_seat(3, 'C', "lunes", 20).unwrap();

    for (day, age) in [("lunes", 20), ("miércoles", 20), ("lunes", 90), ("MIERCOLES", 66)] {
        assert_eq!(
            room.reserve_seat(3, 'C', day, age),
            Err(ReservationError::AlreadyReserved(SeatId::new('C', 3)))
        );
    }
}

#[test]
fn listing_reflects_bookings_in_creation_order() {
    let mut room = SeatLayout::new(['A'], 2).build_room(12.0).unwrap();
    room.reserve_seat(2, 'A', "Miércoles", 70).unwrap();

    assert_eq!(
        room.list_seats(),
        vec![
            "Asiento A-1: Disponible".to_string(),
            "Asiento A-2: Reservado, Precio: 6.00€, Día de reserva: Miércoles\n   \
             Descuentos aplicados: 20% descuento día del espectador, 30% descuento para mayores de 65"
                .to_string(),
        ]
    );
}
