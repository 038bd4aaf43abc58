//! Módulo para montos de dinero.

/// Redondea un monto en dólares a centavos enteros (mitades lejos del cero).
///
/// ```rust
/// use data::utils::money::round_cents;
///
/// assert_eq!(70000, round_cents(700.0));
/// assert_eq!(13, round_cents(0.125));
/// ```
pub fn round_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Muestra un monto en centavos como dólares: signo, separador de miles y dos decimales.
///
/// ```rust
/// use data::utils::money::format_currency;
///
/// assert_eq!("$700.00", format_currency(70000));
/// assert_eq!("$1,234.50", format_currency(123450));
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let dollars = (abs_cents / 100).to_string();
    let remainder = abs_cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{remainder:02}")
}
