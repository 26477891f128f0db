mod commands;
mod menu;
mod terminal;

use std::io;

use anyhow::Context;
use cine_core::Room;
use commands::CommandLine;
use menu::MenuController;
use terminal::{logging, print::Printer};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();
    cfg.validate()?;

    logging::init_logging(&cfg);
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let room = Room::from_config(&cfg).context("failed to set up the room layout")?;
    info!(
        "Room initialized: {} seats at {:.2}{}",
        room.len(),
        room.base_price(),
        room.currency()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock());
    printer.banner(&room, cfg.no_banner)?;

    let mut menu = MenuController::new(room, stdin.lock(), printer);
    menu.run()?;
    Ok(())
}
