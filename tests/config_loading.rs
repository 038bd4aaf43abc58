//! Módulo para _tests_ de carga de tableros desde archivos.

use std::{fs, path::PathBuf};

use data::{errors::error::Error, flights::states::FlightStatus};
use departures::{
    config::{load_config, DEFAULT_CONFIG_PATH},
    printer::formatted_departure_lines,
};
use tempfile::TempDir;

#[test]
fn test_1_archivo_de_ejemplo() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(DEFAULT_CONFIG_PATH);
    let board_res = load_config(&path).and_then(|config| config.build_board());

    assert!(board_res.is_ok());
    if let Ok(board) = board_res {
        assert_eq!(board.airport().destination(), "Madrid");
        assert_eq!(board.len(), 5);
        assert_eq!(board.flights()[1].status, FlightStatus::Cancelled);
        assert_eq!(formatted_departure_lines(&board).len(), 3);
    }
}

#[test]
fn test_2_archivo_temporal_con_logger() {
    let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
    let log_dir = temp_dir.path().join("logs");
    let config_path = temp_dir.path().join("board.json");
    let content = format!(
        r#"{{
            "destination": "Rochester",
            "flights": [ {{ "departure_time": "09:15", "terminal": "4", "status": "Scheduled" }} ],
            "log": {{ "dir": {:?}, "level": "debug" }}
        }}"#,
        log_dir.to_string_lossy()
    );
    fs::write(&config_path, content).expect("Error al escribir la configuración");

    let config_res = load_config(&config_path);
    assert!(config_res.is_ok());

    if let Ok(config) = config_res {
        let logger_res = config.log.logger(&config.destination);
        assert!(logger_res.is_ok());
        if let Ok(logger) = logger_res {
            assert!(logger.debug("Tablero cargado").is_ok());
            assert!(log_dir.join("board_rochester.log").exists());
        }

        let board_res = config.build_board();
        assert!(board_res.is_ok());
        if let Ok(board) = board_res {
            assert_eq!(
                formatted_departure_lines(&board),
                vec!["Your flight at terminal 4, is Scheduled. It departs at 9:15 AM"]
            );
        }
    }
}

#[test]
fn test_3_archivo_inexistente() {
    let temp_dir = TempDir::new().expect("Error al crear directorio temporal");
    let config_res = load_config(&temp_dir.path().join("no_existe.json"));

    assert!(matches!(config_res, Err(Error::ConfigError(_))));
}
