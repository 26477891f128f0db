use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const AVAILABLE: Color = Color::Green;
pub const RESERVED: Color = Color::Red;
pub const PRICE: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
