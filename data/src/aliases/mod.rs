//! Paquete de alias de tipos comunes.

pub mod results;
