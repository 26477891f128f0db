use cine_common::config::{Config, DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW};
use tracing::info;

use crate::error::ReservationError;
use crate::room::Room;

/// Grid of row letters by seat numbers `1..=seats_per_row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    pub rows: Vec<char>,
    pub seats_per_row: u32,
}

impl Default for SeatLayout {
    /// Rows A, B and C with five seats each.
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_vec(),
            seats_per_row: DEFAULT_SEATS_PER_ROW,
        }
    }
}

impl From<&Config> for SeatLayout {
    fn from(cfg: &Config) -> Self {
        Self {
            rows: cfg.rows.clone(),
            seats_per_row: cfg.seats_per_row,
        }
    }
}

impl SeatLayout {
    pub fn new(rows: impl IntoIterator<Item = char>, seats_per_row: u32) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            seats_per_row,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows.len() * self.seats_per_row as usize
    }

    /// Adds every seat of the grid to `room`, row by row.
    ///
    /// A repeated row letter fails with [`ReservationError::DuplicateSeat`].
    pub fn populate(&self, room: &mut Room) -> Result<(), ReservationError> {
        for &row in &self.rows {
            for number in 1..=self.seats_per_row {
                room.add_seat(number, row)?;
            }
        }
        info!(
            "Room ready with {} seats in {} rows",
            self.capacity(),
            self.rows.len()
        );
        Ok(())
    }

    pub fn build_room(&self, base_price: f64) -> Result<Room, ReservationError> {
        let mut room = Room::new(base_price);
        self.populate(&mut room)?;
        Ok(room)
    }
}

impl Room {
    /// Builds a room from runtime settings: price, currency and layout.
    pub fn from_config(cfg: &Config) -> Result<Room, ReservationError> {
        let mut room = Room::new(cfg.base_price).with_currency(cfg.currency.clone());
        SeatLayout::from(cfg).populate(&mut room)?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::SeatId;

    #[test]
    fn test_default_layout_builds_fifteen_seats() {
        let layout = SeatLayout::default();
        assert_eq!(layout.capacity(), 15);

        let room = layout.build_room(10.0).unwrap();
        assert_eq!(room.len(), 15);
        assert_eq!(room.available_count(), 15);
        assert_eq!(room.seats()[0].id(), SeatId::new('A', 1));
        assert_eq!(room.seats()[5].id(), SeatId::new('B', 1));
        assert_eq!(room.seats()[14].id(), SeatId::new('C', 5));
    }

    #[test]
    fn test_repeated_row_is_rejected() {
        let layout = SeatLayout::new(['A', 'B', 'A'], 2);
        assert_eq!(
            layout.build_room(10.0).unwrap_err(),
            ReservationError::DuplicateSeat(SeatId::new('A', 1))
        );
    }

    #[test]
    fn test_from_config() {
        let cfg = Config {
            base_price: 7.5,
            currency: "$".into(),
            rows: vec!['F', 'G'],
            seats_per_row: 3,
            ..Config::default()
        };
        let room = Room::from_config(&cfg).unwrap();
        assert_eq!(room.len(), 6);
        assert_eq!(room.base_price(), 7.5);
        assert_eq!(room.currency(), "$");
        assert!(room.find_seat(3, 'G').is_some());
        assert!(room.find_seat(1, 'A').is_none());
    }
}
