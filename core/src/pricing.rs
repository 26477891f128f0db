//! Ticket discounts.
//!
//! Every rule that applies adds its fraction to a single total, and the
//! base price is multiplied once by `1 - total`. Wednesday plus senior is
//! therefore 50% off, not 20% followed by 30%.

use std::fmt;

use cine_common::text::normalize_text;

/// Normalized day token that earns the spectator day discount.
pub const SPECTATOR_DAY: &str = "miercoles";
pub const SENIOR_AGE: i32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discount {
    /// Wednesday, "día del espectador".
    SpectatorDay,
    /// Viewers aged 65 or older.
    Senior,
}

impl Discount {
    pub fn label(&self) -> &'static str {
        match self {
            Discount::SpectatorDay => "20% descuento día del espectador",
            Discount::Senior => "30% descuento para mayores de 65",
        }
    }

    pub fn fraction(&self) -> f64 {
        match self {
            Discount::SpectatorDay => 0.20,
            Discount::Senior => 0.30,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price of one ticket for a given day and age.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub base_price: f64,
    pub final_price: f64,
    /// Applied discounts, day rule first.
    pub discounts: Vec<Discount>,
}

impl Quote {
    pub fn total_fraction(&self) -> f64 {
        self.discounts.iter().map(Discount::fraction).sum()
    }
}

/// Discounts earned by `day` and `age`, in application order.
///
/// `day` may be raw user input; it is normalized before comparison.
pub fn applicable_discounts(day: &str, age: i32) -> Vec<Discount> {
    let mut discounts = Vec::new();
    if normalize_text(day) == SPECTATOR_DAY {
        discounts.push(Discount::SpectatorDay);
    }
    if age >= SENIOR_AGE {
        discounts.push(Discount::Senior);
    }
    discounts
}

/// Applies the summed discount fraction to `base_price`.
///
/// The fraction is not clamped; the current rules top out at 0.5.
pub fn quote(base_price: f64, day: &str, age: i32) -> Quote {
    let mut quote = Quote {
        base_price,
        final_price: base_price,
        discounts: applicable_discounts(day, age),
    };
    quote.final_price = base_price * (1.0 - quote.total_fraction());
    quote
}
