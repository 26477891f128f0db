use anyhow::{bail, ensure};

pub const DEFAULT_BASE_PRICE: f64 = 10.0;
pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_ROWS: &[char] = &['A', 'B', 'C'];
pub const DEFAULT_SEATS_PER_ROW: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Ticket price before any discount is applied.
    pub base_price: f64,
    /// Symbol printed after every price.
    pub currency: String,
    /// Row letters, in the order their seats are created.
    pub rows: Vec<char>,
    pub seats_per_row: u32,
    /// Diagnostic verbosity, 0 keeps only warnings and errors.
    pub verbose: u8,
    pub no_banner: bool,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            currency: DEFAULT_CURRENCY.to_string(),
            rows: DEFAULT_ROWS.to_vec(),
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            verbose: 0,
            no_banner: false,
            no_color: false,
        }
    }
}

impl Config {
    /// Rejects settings that would produce a room nobody can book.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.base_price.is_finite() && self.base_price >= 0.0,
            "base price must be a non-negative number, got {}",
            self.base_price
        );
        ensure!(!self.rows.is_empty(), "at least one row is required");
        if let Some(bad) = self.rows.iter().find(|c| !c.is_ascii_alphabetic()) {
            bail!("row labels must be letters, got '{bad}'");
        }
        ensure!(self.seats_per_row > 0, "a row needs at least one seat");
        Ok(())
    }

    /// Default level for the log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
