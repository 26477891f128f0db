use std::fmt::Display;
use std::io::{self, Write};

use cine_core::Room;
use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 48;
/// Width of the asterisk rule around a reservation summary.
pub const SUMMARY_WIDTH: usize = 40;

/// Writes the console front end to any sink, usually a locked stdout.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line<T: AsRef<str>>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{}", msg.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Prints without a trailing newline and flushes so the cursor waits
    /// right after the question.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "{}", msg.color(colors::ACCENT))?;
        self.out.flush()
    }

    pub fn banner(&mut self, room: &Room, no_banner: bool) -> io::Result<()> {
        if no_banner {
            return Ok(());
        }

        let text_content: String = format!("⟦ CINE v{} ⟧", env!("CARGO_PKG_VERSION"));
        let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
        let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
        let sep: ColoredString = "═".repeat(side).color(colors::SEPARATOR);
        let text: ColoredString = text_content.color(colors::PRIMARY).bold();
        writeln!(self.out, "{}{}{}", sep, text, sep)?;

        let seats: String = format!("{} asientos", room.len());
        let base_price: String = format::price(room.base_price(), room.currency());
        self.aligned_line("Sala", seats, 11)?;
        self.aligned_line("Precio base", base_price, 11)?;
        self.fat_separator()
    }

    pub fn header(&mut self, msg: &str) -> io::Result<()> {
        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = console::measure_text_width(&formatted);

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        writeln!(
            self.out,
            "{}{}{}",
            "─".repeat(left).color(colors::SEPARATOR),
            formatted.to_uppercase().color(colors::PRIMARY),
            "─".repeat(right).color(colors::SEPARATOR)
        )
    }

    pub fn fat_separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
    }

    pub fn stars(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "*".repeat(SUMMARY_WIDTH))
    }

    pub fn aligned_line<V: Display>(&mut self, key: &str, value: V, key_width: usize) -> io::Result<()> {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
        writeln!(
            self.out,
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        )
    }

    pub fn success<T: AsRef<str>>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{}", msg.as_ref().color(colors::AVAILABLE))
    }

    pub fn error<E: Display>(&mut self, err: E) -> io::Result<()> {
        writeln!(self.out, "{} {}", "Error:".color(colors::ERROR).bold(), err)
    }

    pub fn warning<T: AsRef<str>>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{}", msg.as_ref().color(colors::PRICE))
    }
}
