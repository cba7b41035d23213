use crate::models::DayLabel;

/// Width of the horizontal rule printed between pipeline sections.
const RULE_WIDTH: usize = 50;

/// Format a weekly average with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_average;
///
/// assert_eq!(format_average(1.0), "1.00");
/// assert_eq!(format_average(0.333333), "0.33");
/// assert_eq!(format_average(2.5), "2.50");
/// ```
pub fn format_average(value: f64) -> String {
    format!("{:.2}", value)
}

/// Join weekday labels with `", "`.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::join_labels;
/// use stats_core::models::DayLabel;
///
/// assert_eq!(join_labels(&[DayLabel::Monday, DayLabel::Friday]), "Lunes, Viernes");
/// assert_eq!(join_labels(&[]), "");
/// ```
pub fn join_labels(days: &[DayLabel]) -> String {
    days.iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Horizontal rule separating the output sections.
pub fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title line printed once at start-up.
pub fn banner() -> String {
    format!("=== TRAINING STATS v{} ===", env!("CARGO_PKG_VERSION"))
}

/// Pluralise a count with its unit, e.g. `"1 sesión"` / `"3 sesiones"`.
pub fn count_with_unit(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
