//! Librería de _logging_ a archivos para los tableros de partidas.
//!
//! Cada tablero escribe en su propio archivo `<nombre>.log`, con rotación por tamaño.
//! Opcionalmente, cada mensaje se repite con color por `stderr`, para no mezclarse
//! con lo que el tablero imprime por `stdout`.

use {
    chrono::Local,
    std::{
        error::Error as StdError,
        fmt,
        fs::{self, OpenOptions},
        io::{self, Write},
        path::{Path, PathBuf},
    },
};

/// Colores ANSI para el eco por consola.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    /// Para errores.
    Red,
    /// Para mensajes informativos.
    Green,
    /// Para advertencias.
    Yellow,
    /// Para mensajes de depuración.
    Blue,
}

impl Color {
    fn to_ansi(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
        }
    }
}

/// El nivel de un mensaje. Están ordenados de menor a mayor gravedad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Detalle fino.
    Trace,
    /// Depuración.
    Debug,
    /// Informativo.
    Info,
    /// Advertencia.
    Warning,
    /// Error.
    Error,
}

impl LogLevel {
    /// El color con el que se repite por consola un mensaje de este nivel.
    fn color(self) -> Option<Color> {
        match self {
            LogLevel::Trace => None,
            LogLevel::Debug => Some(Color::Blue),
            LogLevel::Info => Some(Color::Green),
            LogLevel::Warning => Some(Color::Yellow),
            LogLevel::Error => Some(Color::Red),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl TryFrom<&str> for LogLevel {
    type Error = LoggerError;
    fn try_from(level: &str) -> Result<Self, LoggerError> {
        match level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(level.to_string())),
        }
    }
}

/// Configuración para la rotación de archivos.
#[derive(Clone, Debug)]
pub struct RotationConfig {
    /// Tamaño máximo del archivo en bytes.
    pub max_size: u64,
    /// Número máximo de archivos de respaldo.
    pub max_files: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_size: 1024 * 1024, // 1MB por defecto
            max_files: 3,
        }
    }
}

/// Configuración para el formato de los mensajes.
#[derive(Clone, Debug)]
pub struct LogFormatter {
    /// Formato de `chrono` para la fecha y hora.
    pub timestamp_format: String,
    /// Plantilla con `{level}`, `{timestamp}` y `{message}`.
    pub message_template: String,
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            message_template: "[{level}] [{timestamp}]: {message}".to_string(),
        }
    }
}

/// Un _logger_ que escribe en un archivo propio.
#[derive(Clone, Debug)]
pub struct Logger {
    log_file: PathBuf,
    min_level: LogLevel,
    rotation_config: RotationConfig,
    formatter: LogFormatter,
    echo: bool,
}

impl Logger {
    /// Crea un logger que escribe en `<dir>/<name>.log`.
    ///
    /// El nombre se normaliza: todo lo que no sea alfanumérico pasa a ser `_`.
    pub fn new(
        dir: &Path,
        name: &str,
        min_level: LogLevel,
        rotation_config: Option<RotationConfig>,
        formatter: Option<LogFormatter>,
    ) -> Result<Self, LoggerError> {
        if !dir.is_dir() {
            fs::create_dir_all(dir)?;
        }

        let log_file = dir.join(format!("{}.log", file_stem(name)?));

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;

        let rotation_config = match rotation_config {
            Some(config) => {
                if config.max_files == 0 {
                    return Err(LoggerError::InvalidPath(
                        "El número máximo de archivos debe ser mayor a cero".to_string(),
                    ));
                }
                config
            }
            None => RotationConfig::default(),
        };

        Ok(Self {
            log_file,
            min_level,
            rotation_config,
            formatter: formatter.unwrap_or_default(),
            echo: false,
        })
    }

    /// Activa o desactiva el eco con color por `stderr`.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// La ruta del archivo de log actual.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Registra un mensaje si su nivel es igual o superior al nivel mínimo configurado.
    pub fn log(&self, level: LogLevel, msg: &str) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        self.rotate_if_needed()?;

        let timestamp = Local::now()
            .format(&self.formatter.timestamp_format)
            .to_string();
        let log_msg = self
            .formatter
            .message_template
            .replace("{level}", &level.to_string())
            .replace("{timestamp}", &timestamp)
            .replace("{message}", msg);

        if self.echo {
            let mut err = io::stderr().lock();
            match level.color() {
                Some(color) => writeln!(err, "{}{}\x1b[0m", color.to_ansi(), log_msg)?,
                None => writeln!(err, "{}", log_msg)?,
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        writeln!(file, "{}", log_msg)?;
        file.flush()?;

        Ok(())
    }

    /// Mueve los archivos de respaldo cuando el actual supera el tamaño máximo.
    fn rotate_if_needed(&self) -> Result<(), LoggerError> {
        let metadata = fs::metadata(&self.log_file)?;
        if metadata.len() <= self.rotation_config.max_size {
            return Ok(());
        }

        for i in (1..self.rotation_config.max_files).rev() {
            let current = self.backup_path(i);
            if current.exists() {
                if i == self.rotation_config.max_files - 1 {
                    fs::remove_file(current)?;
                } else {
                    fs::rename(current, self.backup_path(i + 1))?;
                }
            }
        }

        if self.rotation_config.max_files > 1 {
            fs::rename(&self.log_file, self.backup_path(1))?;
        }

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.log_file)?;

        Ok(())
    }

    fn backup_path(&self, index: u32) -> PathBuf {
        self.log_file.with_extension(format!("log.{}", index))
    }

    /// Atajo para [LogLevel::Trace].
    pub fn trace(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Trace, msg)
    }

    /// Atajo para [LogLevel::Debug].
    pub fn debug(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Debug, msg)
    }

    /// Atajo para [LogLevel::Info].
    pub fn info(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Info, msg)
    }

    /// Atajo para [LogLevel::Warning].
    pub fn warning(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warning, msg)
    }

    /// Atajo para [LogLevel::Error].
    pub fn error(&self, msg: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, msg)
    }
}

fn file_stem(name: &str) -> Result<String, LoggerError> {
    let stem = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>();

    if stem.is_empty() {
        return Err(LoggerError::InvalidPath(
            "El nombre del archivo de log no puede estar vacío".to_string(),
        ));
    }
    Ok(stem)
}

/// Los errores del _logger_.
#[derive(Debug)]
pub enum LoggerError {
    /// Falló una operación de E/S.
    IoError(io::Error),
    /// La ruta o el nombre del archivo no son válidos.
    InvalidPath(String),
    /// El texto no corresponde a ningún [LogLevel].
    InvalidLevel(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "Error de E/S: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Ruta inválida: {}", msg),
            LoggerError::InvalidLevel(level) => {
                write!(f, "'{}' no es un nivel de log válido", level)
            }
        }
    }
}

impl StdError for LoggerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
