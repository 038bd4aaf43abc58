//! Módulo para funciones auxiliares de [String]s.

/// El marcador que se muestra cuando un horario o una terminal todavía no están asignados.
pub const TBD: &str = "TBD";

/// Devuelve el valor, o el marcador [TBD] si no lo hay.
///
/// ```rust
/// use data::utils::strings::or_tbd;
///
/// assert_eq!("1A".to_string(), or_tbd(Some("1A")));
/// assert_eq!("TBD".to_string(), or_tbd(None));
/// ```
pub fn or_tbd(value: Option<&str>) -> String {
    value.unwrap_or(TBD).to_string()
}

/// Convierte un &[str] a un [Option] dependiendo de si está vacío o no.
///
/// * Si el &[str] es `""` (o sólo espacios), entonces se devuelve [Option::None].
/// * Cualquier otro caso devuelve [Option::Some]\([str].trim().to_string())
///
/// ```rust
/// use data::utils::strings::to_option;
///
/// let empty = to_option("  ");
/// let example = to_option(" 2B ");
///
/// assert!(matches!(empty, None));
/// assert_eq!(example, Some("2B".to_string()));
/// ```
pub fn to_option(string: &str) -> Option<String> {
    match string.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    }
}
