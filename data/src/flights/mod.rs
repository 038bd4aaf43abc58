//! Paquete de vuelos y sus estados.

pub mod flight;
pub mod states;
