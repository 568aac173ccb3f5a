//! Spanish (es-ES) names and date formatting.
//!
//! The page speaks a single hard-coded language, so there is no locale
//! negotiation here, only the strings the calendar needs.

use chrono::{Datelike, NaiveDate, Weekday};

/// Lower-case Spanish month name, e.g. "septiembre"
pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "enero", 2 => "febrero", 3 => "marzo", 4 => "abril",
        5 => "mayo", 6 => "junio", 7 => "julio", 8 => "agosto",
        9 => "septiembre", 10 => "octubre", 11 => "noviembre", 12 => "diciembre",
        _ => "mes inválido",
    }
}

pub fn weekday_name_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Month name with its first letter upper-cased, e.g. "Septiembre"
pub fn capitalized_month_es(month: u32) -> String {
    capitalize(month_name_es(month))
}

/// Page title, e.g. "Septiembre 2025"
pub fn month_title_es(year: i32, month: u32) -> String {
    format!("{} {}", capitalized_month_es(month), year)
}

/// Three-letter label shown under every day number, e.g. "Sep"
pub fn short_month_es(month: u32) -> String {
    capitalized_month_es(month).chars().take(3).collect()
}

/// Long date the way es-ES renders weekday/day/month/year,
/// e.g. "miércoles, 10 de septiembre de 2025"
pub fn long_date_es(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name_es(date.weekday()),
        date.day(),
        month_name_es(date.month()),
        date.year()
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
