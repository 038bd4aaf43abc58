//! Paquete de errores.

pub mod error;
