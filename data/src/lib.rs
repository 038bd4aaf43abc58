//! Librería de las estructuras de datos del tablero de partidas.
//!
//! Acá viven los estados de vuelo, los aeropuertos, los vuelos en sí y el
//! [tablero](boards::departure_board::DepartureBoard) que los agrupa.

#![warn(missing_docs)]

pub mod airports;
pub mod aliases;
pub mod boards;
pub mod errors;
pub mod flights;
pub mod traits;
pub mod utils;
