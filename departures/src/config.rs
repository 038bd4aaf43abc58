//! Módulo para cargar tableros desde archivos JSON.
//!
//! Un archivo de ejemplo:
//!
//! ```json
//! {
//!     "destination": "Madrid",
//!     "flights": [
//!         { "departure_time": "13:26", "terminal": "1A", "status": "en_route" },
//!         { "departure_time": null, "terminal": null, "status": "cancelled" }
//!     ],
//!     "fares": { "ticket_price": 150.0, "bag_fee": 25.0, "mile_fee": 0.10 },
//!     "log": { "dir": "logs", "level": "info", "echo": false }
//! }
//! ```

use {
    crate::fares::FareRates,
    chrono::{DateTime, Local, NaiveTime},
    data::{
        airports::airp::Airport,
        aliases::results::Result,
        boards::departure_board::DepartureBoard,
        errors::error::Error,
        flights::{flight::Flight, states::FlightStatus},
        utils::{strings::to_option, times::today_at},
    },
    logger::{LogLevel, Logger},
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// La ruta por defecto del tablero de ejemplo.
pub const DEFAULT_CONFIG_PATH: &str = "media/boards/madrid.json";

/// El formato de los horarios de salida en los archivos.
const TIME_FORMAT: &str = "%H:%M";

/// La configuración completa de un tablero.
#[derive(Debug, Deserialize)]
pub struct BoardConfig {
    /// El destino del tablero.
    pub destination: String,

    /// Los vuelos, en el orden en que se van a agregar.
    #[serde(default)]
    pub flights: Vec<FlightConfig>,

    /// Las tarifas para calcular pasajes.
    #[serde(default)]
    pub fares: FareRates,

    /// Dónde y cómo se registran los eventos.
    #[serde(default)]
    pub log: LogConfig,
}

/// Un vuelo tal como aparece en el archivo.
#[derive(Debug, Deserialize)]
pub struct FlightConfig {
    /// Hora de salida de hoy, en formato `HH:MM`.
    #[serde(default)]
    pub departure_time: Option<String>,

    /// La terminal. Un texto vacío cuenta como no asignada.
    #[serde(default)]
    pub terminal: Option<String>,

    /// El estado, por identificador (`"en_route"`) o por nombre (`"En Route"`).
    pub status: String,
}

/// Configuración del _logger_ del tablero.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// El directorio de los archivos de log.
    pub dir: PathBuf,

    /// El nivel mínimo a registrar.
    pub level: String,

    /// Si se repiten los mensajes por `stderr`.
    pub echo: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            level: "info".to_string(),
            echo: false,
        }
    }
}

impl LogConfig {
    /// Crea el _logger_ para un tablero con el destino dado.
    pub fn logger(&self, destination: &str) -> Result<Logger> {
        let level = LogLevel::try_from(self.level.as_str())
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let logger = Logger::new(&self.dir, &format!("board {destination}"), level, None, None)
            .map_err(|e| Error::IOError(format!("No se pudo crear el logger: {}", e)))?;
        Ok(logger.with_echo(self.echo))
    }
}

impl FlightConfig {
    /// Convierte la entrada del archivo en un [Flight].
    pub fn to_flight(&self) -> Result<Flight> {
        let status = FlightStatus::try_from(self.status.as_str())
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let departure_time = match self.departure_time.as_deref().and_then(to_option) {
            Some(raw) => Some(parse_departure_time(&raw)?),
            None => None,
        };
        let terminal = self.terminal.as_deref().and_then(to_option);

        Ok(Flight::new(departure_time, terminal, status))
    }
}

impl BoardConfig {
    /// Verifica los valores que `serde` no puede chequear solo.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(Error::ConfigError(
                "El destino del tablero no puede estar vacío.".to_string(),
            ));
        }
        self.fares.validate()
    }

    /// Arma el tablero: se crea vacío y se le agregan los vuelos en orden.
    pub fn build_board(&self) -> Result<DepartureBoard> {
        let mut board = DepartureBoard::new(Airport::new(self.destination.trim()), Vec::new());
        for flight in &self.flights {
            board.append(flight.to_flight()?);
        }
        Ok(board)
    }
}

/// Parsea y valida una configuración a partir de su contenido JSON.
pub fn parse_config(content: &str) -> Result<BoardConfig> {
    let config: BoardConfig = serde_json::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Error deserializando datos JSON: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Lee un archivo JSON de configuración de tablero.
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!(
            "Error leyendo datos JSON de '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_config(&content)
}

fn parse_departure_time(raw: &str) -> Result<DateTime<Local>> {
    let time = NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| {
        Error::ConfigError(format!(
            "'{raw}' no es un horario válido, se esperaba HH:MM."
        ))
    })?;
    today_at(time).ok_or_else(|| {
        Error::ConfigError(format!("El horario '{raw}' no existe en el día de hoy."))
    })
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_1_configuracion_minima() {
        let config_res = parse_config(r#"{ "destination": "Rochester" }"#);

        assert!(config_res.is_ok());
        if let Ok(config) = config_res {
            assert!(config.flights.is_empty());
            assert_eq!(config.fares, FareRates::default());
            assert_eq!(config.log.level, "info");
        }
    }

    #[test]
    fn test_2_vuelos_en_orden() {
        let content = r#"{
            "destination": "Madrid",
            "flights": [
                { "departure_time": "13:26", "terminal": "1A", "status": "en_route" },
                { "departure_time": null, "terminal": "", "status": "Cancelled" }
            ]
        }"#;
        let board_res = parse_config(content).and_then(|config| config.build_board());

        assert!(board_res.is_ok());
        if let Ok(board) = board_res {
            assert_eq!(board.airport().destination(), "Madrid");
            assert_eq!(board.len(), 2);

            let first = &board.flights()[0];
            assert_eq!(first.status, FlightStatus::EnRoute);
            assert_eq!(first.terminal(), Some("1A"));
            assert!(matches!(
                first.departure_time,
                Some(time) if time.hour() == 13 && time.minute() == 26
            ));

            let second = &board.flights()[1];
            assert_eq!(second.status, FlightStatus::Cancelled);
            assert_eq!(second.terminal, None);
            assert_eq!(second.departure_time, None);
        }
    }

    #[test]
    fn test_3_estado_invalido() {
        let content = r#"{ "destination": "Madrid", "flights": [ { "status": "lost" } ] }"#;
        let board_res = parse_config(content).and_then(|config| config.build_board());

        assert!(matches!(board_res, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_4_horario_invalido() {
        let content = r#"{
            "destination": "Madrid",
            "flights": [ { "departure_time": "25:99", "status": "scheduled" } ]
        }"#;
        let board_res = parse_config(content).and_then(|config| config.build_board());

        assert!(matches!(board_res, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_5_destino_vacio_y_tarifas_negativas() {
        assert!(matches!(
            parse_config(r#"{ "destination": "  " }"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            parse_config(r#"{ "destination": "Madrid", "fares": { "mile_fee": -0.5 } }"#),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_6_json_roto() {
        assert!(matches!(
            parse_config("{ \"destination\": "),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_7_nivel_de_log_invalido() {
        let log = LogConfig {
            level: "verbose".to_string(),
            ..LogConfig::default()
        };

        assert!(matches!(log.logger("Madrid"), Err(Error::ConfigError(_))));
    }
}
