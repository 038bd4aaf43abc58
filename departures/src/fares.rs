//! Módulo para calcular el costo total de un viaje.

use {
    data::{
        aliases::results::Result,
        errors::error::Error,
        utils::money::{format_currency, round_cents},
    },
    serde::Deserialize,
};

/// El precio base de cada pasaje, en dólares.
pub const TICKET_PRICE: f64 = 150.0;

/// El costo de cada valija despachada, en dólares.
pub const BAG_FEE: f64 = 25.0;

/// El costo por milla recorrida, en dólares.
pub const MILE_FEE: f64 = 0.10;

/// Las tarifas con las que se calcula un pasaje.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FareRates {
    /// El precio base por pasajero.
    pub ticket_price: f64,

    /// El costo por valija despachada.
    pub bag_fee: f64,

    /// El costo por milla.
    pub mile_fee: f64,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            ticket_price: TICKET_PRICE,
            bag_fee: BAG_FEE,
            mile_fee: MILE_FEE,
        }
    }
}

impl FareRates {
    /// Verifica que ninguna tarifa sea negativa ni inválida.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("ticket_price", self.ticket_price),
            ("bag_fee", self.bag_fee),
            ("mile_fee", self.mile_fee),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(Error::ConfigError(format!(
                    "La tarifa '{name}' debe ser un número no negativo, no {rate}."
                )));
            }
        }
        Ok(())
    }

    /// Desglosa el costo de un viaje.
    pub fn quote(&self, checked_bags: u32, distance_miles: u32, travelers: u32) -> FareQuote {
        let tickets = self.ticket_price * f64::from(travelers);
        let bags = self.bag_fee * f64::from(checked_bags);
        let distance = self.mile_fee * f64::from(distance_miles);

        FareQuote {
            tickets,
            bags,
            distance,
            total: tickets + bags + distance,
        }
    }
}

/// El desglose del costo de un viaje, en dólares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FareQuote {
    /// Los pasajes de todos los pasajeros.
    pub tickets: f64,

    /// Las valijas despachadas.
    pub bags: f64,

    /// La distancia recorrida.
    pub distance: f64,

    /// La suma de todo lo anterior.
    pub total: f64,
}

impl FareQuote {
    /// El total, redondeado a centavos.
    pub fn total_cents(&self) -> i64 {
        round_cents(self.total)
    }

    /// El total como texto en dólares (ej: `"$700.00"`).
    pub fn formatted(&self) -> String {
        format_currency(self.total_cents())
    }
}

/// Calcula la tarifa total de un viaje con las [tarifas por defecto](FareRates::default),
/// y la devuelve como texto en dólares.
///
/// ```rust
/// use departures::fares::calculate_airfare;
///
/// assert_eq!("$700.00", calculate_airfare(2, 2000, 3));
/// ```
pub fn calculate_airfare(checked_bags: u32, distance_miles: u32, travelers: u32) -> String {
    FareRates::default()
        .quote(checked_bags, distance_miles, travelers)
        .formatted()
}
