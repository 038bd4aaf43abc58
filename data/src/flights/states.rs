//! Módulo para el estado de un vuelo.
use {
    crate::{errors::error::Error, traits::PrettyShow},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Un mismo vuelo puede cancelarse, atrasarse, u otras cosas que es necesario mostrar en el tablero.
///
/// Es un conjunto cerrado: agregar un estado obliga a revisar cada `match` que lo usa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    /// Un vuelo actualmente en el aire.
    EnRoute,

    /// Un vuelo programado que todavía no embarca.
    Scheduled,

    /// Un vuelo cancelado.
    Cancelled,

    /// Un vuelo atrasado.
    Delayed,

    /// Un vuelo que ya aterrizó.
    Landed,

    /// Un vuelo embarcando pasajeros.
    Boarding,
}

impl FlightStatus {
    /// Todos los estados, en orden de declaración.
    pub const ALL: [Self; 6] = [
        Self::EnRoute,
        Self::Scheduled,
        Self::Cancelled,
        Self::Delayed,
        Self::Landed,
        Self::Boarding,
    ];
}

impl PrettyShow for FlightStatus {
    fn pretty_name(&self) -> &str {
        match self {
            Self::EnRoute => "En Route",
            Self::Scheduled => "Scheduled",
            Self::Cancelled => "Cancelled",
            Self::Delayed => "Delayed",
            Self::Landed => "Landed",
            Self::Boarding => "Boarding",
        }
    }
}

impl Display for FlightStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EnRoute => write!(f, "en_route"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Delayed => write!(f, "delayed"),
            Self::Landed => write!(f, "landed"),
            Self::Boarding => write!(f, "boarding"),
        }
    }
}

impl TryFrom<&str> for FlightStatus {
    type Error = Error;
    fn try_from(status: &str) -> Result<Self, Self::Error> {
        match status {
            "en_route" => Ok(Self::EnRoute),
            "scheduled" => Ok(Self::Scheduled),
            "cancelled" => Ok(Self::Cancelled),
            "delayed" => Ok(Self::Delayed),
            "landed" => Ok(Self::Landed),
            "boarding" => Ok(Self::Boarding),
            // También se acepta el nombre "lindo", sin importar mayúsculas.
            other => Self::ALL
                .into_iter()
                .find(|candidate| candidate.pretty_name().eq_ignore_ascii_case(other.trim()))
                .ok_or_else(|| {
                    Error::Invalid(format!(
                        "'{status}' no es un nombre válido de estado de vuelo."
                    ))
                }),
        }
    }
}
