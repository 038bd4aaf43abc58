//! Módulo para el tablero de partidas de un aeropuerto.

use std::io::{stdout, Write};

use crate::{
    airports::airp::Airport,
    aliases::results::Result,
    flights::{flight::Flight, states::FlightStatus},
    utils::{strings::or_tbd, times::short_time},
};

/// El mensaje extra para quienes todavía no tienen terminal asignada.
pub const INFO_DESK_MESSAGE: &str = "See the nearest information desk for more details.";

/// El mensaje para vuelos en el aire o ya aterrizados.
pub const EN_ROUTE_OR_LANDED_MESSAGE: &str = "Your flight is either on route or has landed.";

/// Un tablero de partidas: el aeropuerto de destino y sus vuelos salientes.
///
/// El aeropuerto queda fijo de por vida, y los vuelos sólo se pueden agregar al final.
#[derive(Clone, Debug)]
pub struct DepartureBoard {
    /// Los vuelos, en el orden en que se agregaron.
    flights: Vec<Flight>,

    /// El aeropuerto del tablero.
    airport: Airport,
}

impl DepartureBoard {
    /// Crea un nuevo tablero. La lista inicial de vuelos puede estar vacía.
    pub fn new(airport: Airport, flights: Vec<Flight>) -> Self {
        Self { flights, airport }
    }

    /// Agrega un vuelo al final del tablero.
    pub fn append(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    /// Los vuelos del tablero, en orden.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// El aeropuerto del tablero.
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// La cantidad de vuelos.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Si el tablero no tiene vuelos.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Arma los avisos para los pasajeros, vuelo por vuelo y en orden.
    ///
    /// Cada vuelo genera un mensaje según su estado, seguido del aviso de
    /// [mesa de informes](INFO_DESK_MESSAGE) si no tiene terminal.
    pub fn alerts(&self) -> Vec<String> {
        let destination = self.airport.destination();
        let mut alerts = Vec::<String>::with_capacity(self.flights.len());

        for flight in &self.flights {
            let terminal = or_tbd(flight.terminal());
            let alert = match flight.status {
                FlightStatus::Cancelled => format!(
                    "We're sorry your flight to {destination} was canceled, here is a $500 voucher"
                ),
                FlightStatus::Scheduled => {
                    let time = or_tbd(flight.departure_time.as_ref().map(short_time).as_deref());
                    format!(
                        "Your flight to {destination} is scheduled to depart at {time} from terminal: {terminal}"
                    )
                }
                FlightStatus::Boarding => format!(
                    "Your flight is boarding, please head to terminal: {terminal} immediately. The doors are closing soon."
                ),
                FlightStatus::Delayed => format!(
                    "We're sorry, your flight to {destination} has been delayed. Please check the board for the new departure time."
                ),
                FlightStatus::EnRoute | FlightStatus::Landed => {
                    EN_ROUTE_OR_LANDED_MESSAGE.to_string()
                }
            };
            alerts.push(alert);

            if flight.terminal.is_none() {
                alerts.push(INFO_DESK_MESSAGE.to_string());
            }
        }

        alerts
    }

    /// Escribe los [avisos](DepartureBoard::alerts) en un _stream_, uno por línea.
    pub fn alert_passengers_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for alert in self.alerts() {
            writeln!(writer, "{alert}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Imprime los [avisos](DepartureBoard::alerts) por salida estándar.
    pub fn alert_passengers(&self) -> Result<()> {
        self.alert_passengers_to(&mut stdout().lock())
    }
}
