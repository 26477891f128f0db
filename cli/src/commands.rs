use clap::{ArgAction, Parser};
use cine_common::config::{Config, DEFAULT_BASE_PRICE, DEFAULT_CURRENCY, DEFAULT_SEATS_PER_ROW};

#[derive(Parser, Debug)]
#[command(name = "cine", version)]
#[command(about = "Seat reservations for a single cinema room.")]
pub struct CommandLine {
    /// Base ticket price before discounts
    #[arg(short, long, default_value_t = DEFAULT_BASE_PRICE)]
    pub price: f64,

    /// Currency symbol printed after prices
    #[arg(short, long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Row letters, in creation order (e.g. "ABC")
    #[arg(short, long, default_value = "ABC")]
    pub rows: String,

    /// Seats per row, numbered from 1
    #[arg(short, long, default_value_t = DEFAULT_SEATS_PER_ROW)]
    pub seats: u32,

    /// Increase diagnostic output (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            base_price: self.price,
            currency: self.currency.clone(),
            rows: self
                .rows
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .flat_map(char::to_uppercase)
                .collect(),
            seats_per_row: self.seats,
            verbose: self.verbose,
            no_banner: self.no_banner,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_room() {
        let cmd = CommandLine::try_parse_from(["cine"]).unwrap();
        assert_eq!(cmd.to_config(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let cmd = CommandLine::try_parse_from([
            "cine", "-p", "12.5", "-c", "$", "-r", "a, b,d", "-s", "8", "-vv", "--no-banner",
            "--no-color",
        ])
        .unwrap();
        let cfg = cmd.to_config();

        assert_eq!(cfg.base_price, 12.5);
        assert_eq!(cfg.currency, "$");
        assert_eq!(cfg.rows, vec!['A', 'B', 'D']);
        assert_eq!(cfg.seats_per_row, 8);
        assert_eq!(cfg.verbose, 2);
        assert!(cfg.no_banner);
        assert!(cfg.no_color);
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        assert!(CommandLine::try_parse_from(["cine", "--price", "diez"]).is_err());
    }
}
