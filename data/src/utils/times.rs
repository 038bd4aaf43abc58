//! Módulo para formatear y armar horarios.

use chrono::{DateTime, Local, NaiveTime};

/// Formato corto de hora del día, sin fecha: `1:26 PM`.
const SHORT_TIME_FORMAT: &str = "%-I:%M %p";

/// Muestra sólo la hora del día, en formato corto de 12 horas.
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use data::utils::times::short_time;
///
/// let departure = Local.with_ymd_and_hms(2019, 5, 30, 13, 26, 0).earliest().unwrap();
/// assert_eq!("1:26 PM", short_time(&departure));
/// ```
pub fn short_time(time: &DateTime<Local>) -> String {
    time.format(SHORT_TIME_FORMAT).to_string()
}

/// Combina una hora del día con la fecha local de hoy.
///
/// Devuelve [None] si esa hora no existe hoy (ej: salteada por un cambio de horario).
pub fn today_at(time: NaiveTime) -> Option<DateTime<Local>> {
    Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    #[test]
    fn test_1_hora_de_la_manana() {
        let departure = Local
            .with_ymd_and_hms(2024, 1, 15, 9, 5, 0)
            .earliest()
            .expect("Fecha inválida");

        assert_eq!(short_time(&departure), "9:05 AM");
    }

    #[test]
    fn test_2_mediodia_y_medianoche() {
        let noon = Local
            .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
            .earliest()
            .expect("Fecha inválida");
        let midnight = Local
            .with_ymd_and_hms(2024, 1, 15, 0, 30, 0)
            .earliest()
            .expect("Fecha inválida");

        assert_eq!(short_time(&noon), "12:00 PM");
        assert_eq!(short_time(&midnight), "12:30 AM");
    }

    #[test]
    fn test_3_hoy_a_cierta_hora() {
        let time = NaiveTime::from_hms_opt(12, 0, 0).expect("Hora inválida");
        let today = today_at(time);

        assert!(today.is_some());
        if let Some(date) = today {
            assert_eq!(date.date_naive(), Local::now().date_naive());
            assert_eq!(date.hour(), 12);
        }
    }
}
