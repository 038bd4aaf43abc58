//! Módulo para manejar los datos de un aeropuerto.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Estructura que representa el aeropuerto de destino de un tablero.
///
/// Es inmutable una vez creado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Airport {
    /// El nombre del destino (ej: `"Madrid"`).
    destination: String,
}

impl Airport {
    /// Crea un nuevo aeropuerto.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// El nombre del destino.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.destination)
    }
}
