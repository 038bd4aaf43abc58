//! Módulo de la interfaz de línea de comandos.
//!
//! Arma un tablero (de ejemplo o desde un archivo), imprime sus partidas,
//! avisa a los pasajeros y calcula tarifas.

use {
    crate::{
        config::{load_config, LogConfig},
        fares::{calculate_airfare, FareRates},
        printer::{print_departures, print_departures_formatted},
    },
    chrono::{DateTime, Local},
    data::{
        airports::airp::Airport,
        aliases::results::Result,
        boards::departure_board::DepartureBoard,
        errors::error::Error,
        flights::{flight::Flight, states::FlightStatus},
    },
    logger::Logger,
    std::path::PathBuf,
};

/// El destino del tablero de ejemplo.
pub const SAMPLE_DESTINATION: &str = "Madrid";

/// Los parámetros del cálculo de tarifa de ejemplo: valijas, millas y pasajeros.
pub const SAMPLE_FARE: (u32, u32, u32) = (2, 2000, 3);

/// Los comandos que entiende el binario.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Corre todo sobre el tablero de ejemplo.
    Demo,

    /// Corre todo sobre un tablero cargado desde un archivo JSON.
    Show(PathBuf),

    /// Calcula una tarifa con las tarifas por defecto.
    Fare {
        /// Valijas despachadas.
        checked_bags: u32,
        /// Distancia en millas.
        distance_miles: u32,
        /// Cantidad de pasajeros.
        travelers: u32,
    },

    /// Muestra la ayuda.
    Help,
}

impl TryFrom<&[String]> for Command {
    type Error = Error;
    fn try_from(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(Self::Demo),
            [cmd] if cmd == "demo" => Ok(Self::Demo),
            [cmd] if cmd == "help" || cmd == "-h" || cmd == "--help" => Ok(Self::Help),
            [cmd, path] if cmd == "show" => Ok(Self::Show(PathBuf::from(path))),
            [cmd, bags, miles, travelers] if cmd == "fare" => Ok(Self::Fare {
                checked_bags: parse_count("bags", bags)?,
                distance_miles: parse_count("miles", miles)?,
                travelers: parse_count("travelers", travelers)?,
            }),
            _ => Err(Error::Invalid(format!(
                "Argumentos inválidos: '{}'. Usar 'help' para ver los comandos.",
                args.join(" ")
            ))),
        }
    }
}

/// Interpreta los argumentos (sin el nombre del programa) y ejecuta el comando.
pub fn run(args: &[String]) -> Result<()> {
    match Command::try_from(args)? {
        Command::Demo => {
            let logger = start_logger(&LogConfig::default(), SAMPLE_DESTINATION);
            log_info(logger.as_ref(), "Corriendo el tablero de ejemplo");
            let board = sample_board(Local::now());
            log_board(logger.as_ref(), &board);
            run_board(&board, &FareRates::default())
        }
        Command::Show(path) => {
            let config = load_config(&path)?;
            let logger = start_logger(&config.log, &config.destination);
            log_info(
                logger.as_ref(),
                &format!("Cargando tablero desde '{}'", path.display()),
            );
            let board = config.build_board()?;
            log_board(logger.as_ref(), &board);
            run_board(&board, &config.fares)
        }
        Command::Fare {
            checked_bags,
            distance_miles,
            travelers,
        } => {
            println!(
                "{}",
                calculate_airfare(checked_bags, distance_miles, travelers)
            );
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

/// El tablero de ejemplo: se crea vacío y se le agregan tres vuelos.
pub fn sample_board(now: DateTime<Local>) -> DepartureBoard {
    let mut board = DepartureBoard::new(Airport::new(SAMPLE_DESTINATION), Vec::new());

    board.append(Flight::new(
        Some(now),
        Some("1A".to_string()),
        FlightStatus::EnRoute,
    ));
    board.append(Flight::new(None, None, FlightStatus::Cancelled));
    board.append(Flight::new(
        Some(now),
        Some("2B".to_string()),
        FlightStatus::Delayed,
    ));

    board
}

/// Corre, en orden, las dos impresiones de partidas, los avisos y el cálculo de tarifa.
pub fn run_board(board: &DepartureBoard, rates: &FareRates) -> Result<()> {
    println!("== Departures ==");
    print_departures(board)?;

    println!("\n== Departures (formatted) ==");
    print_departures_formatted(board)?;

    println!("\n== Passenger alerts ==");
    board.alert_passengers()?;

    let (checked_bags, distance_miles, travelers) = SAMPLE_FARE;
    println!("\n== Airfare ==");
    println!(
        "{} bags, {} miles, {} travelers: {}",
        checked_bags,
        distance_miles,
        travelers,
        rates
            .quote(checked_bags, distance_miles, travelers)
            .formatted()
    );

    Ok(())
}

fn parse_count(name: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        Error::Invalid(format!(
            "'{raw}' no es un valor válido para {name}: debe ser un entero no negativo."
        ))
    })
}

/// Crea el _logger_ del tablero. Si no se puede, lo avisa por `stderr` y se sigue sin logs.
pub fn start_logger(log: &LogConfig, destination: &str) -> Option<Logger> {
    match log.logger(destination) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Se continúa sin logs: {err}");
            None
        }
    }
}

fn log_board(logger: Option<&Logger>, board: &DepartureBoard) {
    log_info(logger, &format!("Tablero creado para {}", board.airport()));
    let Some(logger) = logger else {
        return;
    };
    for flight in board.flights() {
        if let Err(err) = logger.debug(&format!("Vuelo agregado: {:?}", flight)) {
            eprintln!("{err}");
        }
    }
}

// Un log fallido no corta la ejecución del tablero.
fn log_info(logger: Option<&Logger>, msg: &str) {
    if let Some(Err(err)) = logger.map(|logger| logger.info(msg)) {
        eprintln!("{err}");
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  demo");
    println!("    Builds the sample board (Madrid, three flights) and runs everything on it.");
    println!("  show <config.json>");
    println!("    Loads a board from a JSON file and runs everything on it.");
    println!("  fare <bags> <miles> <travelers>");
    println!("    Prints the airfare using the default rates.");
    println!("  help");
    println!("    Shows this message.");
}
