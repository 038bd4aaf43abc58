//! Binario del tablero de partidas.

use {departures::cli::run, std::env::args, std::process::exit};

fn main() {
    let argv = args().skip(1).collect::<Vec<String>>();
    if let Err(err) = run(&argv) {
        eprintln!("{err}");
        exit(1);
    }
}
