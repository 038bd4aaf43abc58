//! Módulo para _tests_ de los avisos a pasajeros.

mod common;

use common::{departure, every_combination, madrid_board};
use data::{
    boards::departure_board::INFO_DESK_MESSAGE,
    flights::{flight::Flight, states::FlightStatus},
};

/// Agrupa los avisos por vuelo: la línea del estado y, si la hay, la de mesa de informes.
fn alerts_per_flight(alerts: &[String], flights: &[Flight]) -> Vec<(String, Option<String>)> {
    let mut grouped = Vec::new();
    let mut lines = alerts.iter();
    for flight in flights {
        let status_line = lines.next().cloned().unwrap_or_default();
        let follow_up = if flight.terminal.is_none() {
            lines.next().cloned()
        } else {
            None
        };
        grouped.push((status_line, follow_up));
    }
    assert!(lines.next().is_none(), "Sobran avisos");
    grouped
}

#[test]
fn test_1_cancelados_siempre_con_voucher() {
    let flights = every_combination();
    let board = madrid_board(flights.clone());
    let grouped = alerts_per_flight(&board.alerts(), &flights);

    for (flight, (status_line, _)) in flights.iter().zip(grouped) {
        if flight.status == FlightStatus::Cancelled {
            assert_eq!(
                status_line,
                "We're sorry your flight to Madrid was canceled, here is a $500 voucher"
            );
        }
    }
}

#[test]
fn test_2_mesa_de_informes_justo_despues() {
    let flights = every_combination();
    let board = madrid_board(flights.clone());
    let alerts = board.alerts();

    let expected_len = flights.len() + flights.iter().filter(|f| f.terminal.is_none()).count();
    assert_eq!(alerts.len(), expected_len);

    let grouped = alerts_per_flight(&alerts, &flights);
    for (flight, (status_line, follow_up)) in flights.iter().zip(grouped) {
        assert_ne!(status_line, INFO_DESK_MESSAGE);
        if flight.terminal.is_none() {
            assert_eq!(follow_up.as_deref(), Some(INFO_DESK_MESSAGE));
        }
    }
}

#[test]
fn test_3_avisos_en_orden_de_agregado() {
    let mut board = madrid_board(Vec::new());
    board.append(Flight::unassigned(FlightStatus::Boarding).with_terminal("7"));
    board.append(
        Flight::unassigned(FlightStatus::Scheduled)
            .with_terminal("3")
            .with_departure_time(departure()),
    );
    board.append(Flight::unassigned(FlightStatus::Landed).with_terminal("1"));

    assert_eq!(
        board.alerts(),
        vec![
            "Your flight is boarding, please head to terminal: 7 immediately. The doors are closing soon.",
            "Your flight to Madrid is scheduled to depart at 1:26 PM from terminal: 3",
            "Your flight is either on route or has landed.",
        ]
    );
}

#[test]
fn test_4_agregar_suma_uno_y_conserva_orden() {
    let mut board = madrid_board(Vec::new());
    let flights = every_combination();

    for (i, flight) in flights.iter().enumerate() {
        let before = board.flights().to_vec();
        board.append(flight.clone());

        assert_eq!(board.len(), i + 1);
        assert_eq!(&board.flights()[..i], &before[..]);
        assert_eq!(board.flights()[i], *flight);
    }
}
