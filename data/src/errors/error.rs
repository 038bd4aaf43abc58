//! Módulo para mensajes de errores.

use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IOError,
};

/// Los errores que pueden surgir al armar o mostrar un tablero.
///
/// Un valor opcional ausente (terminal u horario sin asignar) **no** es un error.
#[derive(Debug)]
pub enum Error {
    /// Un valor recibido no tiene sentido para el dominio (ej: un estado de vuelo desconocido).
    Invalid(String),

    /// El archivo de configuración está mal armado o tiene valores inválidos.
    ConfigError(String),

    /// Falló la escritura o lectura de algún _stream_.
    IOError(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Invalid(msg) => write!(f, "Invalid: {}", msg),
            Self::ConfigError(msg) => write!(f, "ConfigError: {}", msg),
            Self::IOError(msg) => write!(f, "IOError: {}", msg),
        }
    }
}

impl StdError for Error {}

impl From<IOError> for Error {
    fn from(io_err: IOError) -> Self {
        Self::IOError(io_err.to_string())
    }
}
