//! Interactive console menu.
//!
//! The loop is the recovery boundary for every command: input mistakes and
//! reservation rule violations are printed as `Error: ...` and the menu is
//! shown again. Only the exit option, end of input, or a failing terminal
//! stops it.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use cine_core::{Reservation, ReservationError, Room, SeatId};
use thiserror::Error;
use tracing::debug;

use crate::terminal::format;
use crate::terminal::print::Printer;

const ROW_PROMPT: &str = "Ingresa la fila del asiento (ej. A, B): ";
const NUMBER_PROMPT: &str = "Ingresa el número del asiento: ";
const DAY_PROMPT: &str = "Ingresa el día (ej. lunes, miércoles): ";
const AGE_PROMPT: &str = "Ingresa la edad del espectador: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ShowSeats,
    Reserve,
    Cancel,
    Exit,
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::ShowSeats),
            "2" => Ok(MenuOption::Reserve),
            "3" => Ok(MenuOption::Cancel),
            "4" => Ok(MenuOption::Exit),
            other => Err(format!("invalid menu option: {other}")),
        }
    }
}

/// Problems with what the user typed, before any seat is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("la fila debe ser una sola letra, se recibió '{0}'.")]
    InvalidRow(String),
    #[error("'{0}' no es un número entero válido.")]
    InvalidNumber(String),
    #[error("la entrada se cerró.")]
    Closed,
}

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Reservation(#[from] ReservationError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Uppercases and checks a row answer such as `a` or ` B `.
pub fn parse_row(input: &str) -> Result<char, InputError> {
    let upper: String = input.trim().to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(row), None) if row.is_alphabetic() => Ok(row),
        _ => Err(InputError::InvalidRow(input.trim().to_string())),
    }
}

pub fn parse_number(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

/// Ages are signed so a typo like `-5` still books, at full price.
pub fn parse_age(input: &str) -> Result<i32, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

pub struct MenuController<R: BufRead, W: Write> {
    room: Room,
    input: R,
    printer: Printer<W>,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(room: Room, input: R, printer: Printer<W>) -> Self {
        Self {
            room,
            input,
            printer,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Room, Printer<W>) {
        (self.room, self.printer)
    }

    /// Shows the menu and dispatches options until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_answer("Selecciona una opción: ")? else {
                debug!("Input closed, leaving the menu");
                break;
            };
            if !self.process_option(&choice)? {
                break;
            }
        }
        Ok(())
    }

    pub fn show_menu(&mut self) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.header("Menú")?;
        self.printer.line("1. Mostrar asientos")?;
        self.printer.line("2. Reservar asiento")?;
        self.printer.line("3. Cancelar reserva")?;
        self.printer.line("4. Salir")
    }

    /// Runs one menu choice. Returns `false` once the session should end.
    pub fn process_option(&mut self, choice: &str) -> io::Result<bool> {
        let option = match choice.parse::<MenuOption>() {
            Ok(option) => option,
            Err(reason) => {
                debug!("{reason}");
                self.printer.warning("Opción inválida. Inténtalo de nuevo.")?;
                return Ok(true);
            }
        };

        match option {
            MenuOption::ShowSeats => {
                self.show_seats()?;
                Ok(true)
            }
            MenuOption::Reserve => match self.reserve() {
                Ok(reservation) => {
                    self.print_reservation(&reservation)?;
                    Ok(true)
                }
                Err(err) => self.recover(err),
            },
            MenuOption::Cancel => match self.cancel() {
                Ok(id) => {
                    self.printer
                        .success(format!("Reserva del asiento {id} cancelada correctamente."))?;
                    Ok(true)
                }
                Err(err) => self.recover(err),
            },
            MenuOption::Exit => {
                self.printer.line("Saliendo del sistema. ¡Hasta luego!")?;
                Ok(false)
            }
        }
    }

    fn recover(&mut self, err: CommandError) -> io::Result<bool> {
        match err {
            CommandError::Io(e) => Err(e),
            CommandError::Input(InputError::Closed) => Ok(false),
            other => {
                self.printer.error(&other)?;
                Ok(true)
            }
        }
    }

    fn show_seats(&mut self) -> io::Result<()> {
        self.printer.blank()?;
        self.printer.header("Estado de los asientos")?;
        for line in self.room.list_seats() {
            self.printer.line(format::seat_line(&line))?;
        }
        Ok(())
    }

    fn reserve(&mut self) -> Result<Reservation, CommandError> {
        let row = parse_row(&self.ask(ROW_PROMPT)?)?;
        let number = parse_number(&self.ask(NUMBER_PROMPT)?)?;
        let day = self.ask(DAY_PROMPT)?;
        let age = parse_age(&self.ask(AGE_PROMPT)?)?;

        Ok(self.room.reserve_seat(number, row, day.trim(), age)?)
    }

    fn cancel(&mut self) -> Result<SeatId, CommandError> {
        let row = parse_row(&self.ask(ROW_PROMPT)?)?;
        let number = parse_number(&self.ask(NUMBER_PROMPT)?)?;

        self.room.cancel_reservation(number, row)?;
        Ok(SeatId::new(row, number))
    }

    fn print_reservation(&mut self, reservation: &Reservation) -> io::Result<()> {
        let currency = self.room.currency().to_string();

        self.printer.blank()?;
        self.printer.stars()?;
        self.printer.line(format!("Día de reserva: {}", reservation.day))?;
        self.printer.line(format!(
            "Precio sin descuento: {}",
            format::price(reservation.base_price, &currency)
        ))?;
        if !reservation.discounts.is_empty() {
            self.printer.line("Descuentos aplicados:")?;
            for discount in &reservation.discounts {
                self.printer.line(format!("- {discount}"))?;
            }
        }
        self.printer.line(format!(
            "Precio final: {}",
            format::colored_price(reservation.final_price, &currency)
        ))?;
        self.printer.stars()?;
        self.printer.blank()
    }

    fn ask(&mut self, prompt: &str) -> Result<String, CommandError> {
        self.read_answer(prompt)?
            .ok_or(CommandError::Input(InputError::Closed))
    }

    /// `None` once the input is exhausted.
    fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.printer.prompt(prompt)?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}
