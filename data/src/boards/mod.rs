//! Paquete de tableros de partidas.

pub mod departure_board;
