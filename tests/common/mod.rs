//! Paquete para funciones públicas comunes entre tests de integración.
//!
//! Dichas funciones se definen directamente en este archivo, o sino corremos el riesgo
//! de que cargo crea que los archivos son archivos de tests en sí.

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use data::{
    airports::airp::Airport,
    boards::departure_board::DepartureBoard,
    flights::{flight::Flight, states::FlightStatus},
};

/// Un horario fijo, para que las líneas formateadas sean predecibles.
pub fn departure() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2019, 5, 30, 13, 26, 0)
        .earliest()
        .expect("Fecha inválida")
}

/// Un vuelo con todos los datos asignados.
pub fn complete_flight(terminal: &str, status: FlightStatus) -> Flight {
    Flight::new(Some(departure()), Some(terminal.to_string()), status)
}

/// Una combinación de cada estado con cada forma de dato faltante.
pub fn every_combination() -> Vec<Flight> {
    let mut flights = Vec::new();
    for status in FlightStatus::ALL {
        flights.push(complete_flight("1A", status));
        flights.push(Flight::new(None, Some("2B".to_string()), status));
        flights.push(Flight::new(Some(departure()), None, status));
        flights.push(Flight::unassigned(status));
    }
    flights
}

/// Un tablero a Madrid con los vuelos dados.
pub fn madrid_board(flights: Vec<Flight>) -> DepartureBoard {
    DepartureBoard::new(Airport::new("Madrid"), flights)
}
