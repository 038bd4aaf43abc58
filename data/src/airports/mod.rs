//! Paquete de aeropuertos.

pub mod airp;
