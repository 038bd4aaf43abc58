//! Módulo para la estructura de vuelo.

use chrono::{DateTime, Local};

use crate::flights::states::FlightStatus;

/// Un vuelo saliente, tal como aparece en un tablero de partidas.
///
/// No tiene identidad propia: dos vuelos son iguales si todos sus campos lo son.
#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    /// El horario de salida, si se conoce.
    ///
    /// Un vuelo [cancelado](FlightStatus::Cancelled) normalmente no tiene uno.
    pub departure_time: Option<DateTime<Local>>,

    /// La terminal de embarque, si ya fue asignada.
    pub terminal: Option<String>,

    /// El estado del vuelo.
    pub status: FlightStatus,
}

impl Flight {
    /// Crea una nueva instancia de vuelo.
    pub fn new(
        departure_time: Option<DateTime<Local>>,
        terminal: Option<String>,
        status: FlightStatus,
    ) -> Self {
        Self {
            departure_time,
            terminal,
            status,
        }
    }

    /// Crea un vuelo sin horario ni terminal asignados.
    pub fn unassigned(status: FlightStatus) -> Self {
        Self::new(None, None, status)
    }

    /// Asigna el horario de salida.
    pub fn with_departure_time(mut self, departure_time: DateTime<Local>) -> Self {
        self.departure_time = Some(departure_time);
        self
    }

    /// Asigna la terminal.
    pub fn with_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.terminal = Some(terminal.into());
        self
    }

    /// La terminal como `&str`, si está.
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }
}
