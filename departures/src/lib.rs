//! Librería para mostrar tableros de partidas y calcular tarifas.

#![warn(missing_docs)]

/// Módulo de la interfaz de línea de comandos.
pub mod cli;
/// Módulo de archivos de configuración de tableros.
pub mod config;
/// Módulo del cálculo de tarifas.
pub mod fares;
/// Módulo de impresión de partidas.
pub mod printer;
