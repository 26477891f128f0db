use colored::*;

use crate::terminal::colors;

const AVAILABLE_LABEL: &str = "Disponible";
const RESERVED_LABEL: &str = "Reservado";

/// Two decimals followed by the currency symbol, e.g. `8.00€`.
pub fn price(amount: f64, currency: &str) -> String {
    format!("{amount:.2}{currency}")
}

pub fn colored_price(amount: f64, currency: &str) -> ColoredString {
    price(amount, currency).color(colors::PRICE).bold()
}

/// Highlights the status word of a seat description.
pub fn seat_line(description: &str) -> String {
    if let Some(rest) = description.strip_suffix(AVAILABLE_LABEL) {
        return format!("{}{}", rest, AVAILABLE_LABEL.color(colors::AVAILABLE));
    }
    match description.split_once(RESERVED_LABEL) {
        Some((head, tail)) => format!(
            "{}{}{}",
            head,
            RESERVED_LABEL.color(colors::RESERVED).bold(),
            tail
        ),
        None => description.to_string(),
    }
}
