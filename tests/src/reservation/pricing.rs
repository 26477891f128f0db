#![cfg(test)]
use cine_common::text::normalize_text;
use cine_core::{Room, SeatLayout};

fn room() -> Room {
    SeatLayout::default().build_room(10.0).unwrap()
}

fn assert_quote(room: &Room, day: &str, age: i32, price: f64, labels: usize) {
    let quote = room.compute_price(day, age);
    assert!(
        (quote.final_price - price).abs() < 1e-9,
        "{day}/{age}: expected {price:.2}, got {}",
        quote.final_price
    );
    assert_eq!(quote.discounts.len(), labels, "{day}/{age}");
    assert_eq!(quote.base_price, 10.0);
}

#[test]
fn reference_price_table() {
    let room = room();
    assert_quote(&room, "miercoles", 30, 8.0, 1);
    assert_quote(&room, "miercoles", 70, 5.0, 2);
    assert_quote(&room, "monday", 30, 10.0, 0);
    assert_quote(&room, "monday", 70, 7.0, 1);
}

#[test]
fn day_spellings_are_equivalent() {
    let room = room();
    let tokens: Vec<String> = ["Miércoles", "MIERCOLES", "miercoles"]
        .iter()
        .map(|day| normalize_text(day))
        .collect();
    assert!(tokens.iter().all(|t| t == "miercoles"));

    for day in ["Miércoles", "MIERCOLES", "miercoles"] {
        assert_quote(&room, day, 30, 8.0, 1);
    }
}

#[test]
fn pricing_leaves_seats_untouched() {
    let room = room();
    let _ = room.compute_price("miercoles", 99);
    assert_eq!(room.available_count(), 15);
}
