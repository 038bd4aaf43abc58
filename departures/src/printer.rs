//! Funciones para imprimir las partidas de un [tablero](DepartureBoard).
//!
//! Hay dos variantes a propósito:
//!
//! * [print_departures] muestra los valores opcionales "crudos", marcando explícitamente
//!   los que no están asignados (`None`).
//! * [print_departures_formatted] sólo muestra los vuelos que tienen terminal **y** horario,
//!   con el horario en formato corto. Los demás se omiten sin aviso.

use std::io::{stdout, Write};

use data::{
    aliases::results::Result,
    boards::departure_board::DepartureBoard,
    flights::states::FlightStatus,
    traits::PrettyShow,
    utils::times::short_time,
};

/// Lo que se muestra en [print_departures] para un vuelo cancelado.
pub const CANCELLED_NOTICE: &str = "Sorry your flight has been cancelled";

/// Las líneas de [print_departures], sin imprimir.
pub fn departure_lines(board: &DepartureBoard) -> Vec<String> {
    board
        .flights()
        .iter()
        .map(|flight| match flight.status {
            FlightStatus::Cancelled => CANCELLED_NOTICE.to_string(),
            _ => format!(
                "Your flight at terminal {:?}, is {}. It departs at {:?}",
                flight.terminal,
                flight.status.pretty_name(),
                flight.departure_time
            ),
        })
        .collect()
}

/// Las líneas de [print_departures_formatted], sin imprimir.
pub fn formatted_departure_lines(board: &DepartureBoard) -> Vec<String> {
    board
        .flights()
        .iter()
        .filter_map(|flight| {
            let terminal = flight.terminal.as_ref()?;
            let departure_time = flight.departure_time.as_ref()?;
            Some(format!(
                "Your flight at terminal {}, is {}. It departs at {}",
                terminal,
                flight.status.pretty_name(),
                short_time(departure_time)
            ))
        })
        .collect()
}

/// Escribe las líneas de [print_departures] en un _stream_.
pub fn write_departures<W: Write>(board: &DepartureBoard, writer: &mut W) -> Result<()> {
    write_lines(departure_lines(board), writer)
}

/// Escribe las líneas de [print_departures_formatted] en un _stream_.
pub fn write_departures_formatted<W: Write>(
    board: &DepartureBoard,
    writer: &mut W,
) -> Result<()> {
    write_lines(formatted_departure_lines(board), writer)
}

/// Imprime cada partida del tablero tal cual, sin desenvolver los valores opcionales.
pub fn print_departures(board: &DepartureBoard) -> Result<()> {
    write_departures(board, &mut stdout().lock())
}

/// Imprime las partidas que tienen terminal y horario, con el horario en formato corto.
pub fn print_departures_formatted(board: &DepartureBoard) -> Result<()> {
    write_departures_formatted(board, &mut stdout().lock())
}

fn write_lines<W: Write>(lines: Vec<String>, writer: &mut W) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
