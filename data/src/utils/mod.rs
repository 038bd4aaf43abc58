//! Paquete de funciones auxiliares.

pub mod money;
pub mod strings;
pub mod times;
