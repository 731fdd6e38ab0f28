//! Date Stamp
//!
//! `ru-RU` long date, e.g. "среда, 14 октября 2026 г.".

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "понедельник",
        Weekday::Tue => "вторник",
        Weekday::Wed => "среда",
        Weekday::Thu => "четверг",
        Weekday::Fri => "пятница",
        Weekday::Sat => "суббота",
        Weekday::Sun => "воскресенье",
    }
}

pub fn format_ru_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {} г.",
        weekday_name(date.weekday()),
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ru_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert_eq!(format_ru_date(date), "среда, 14 октября 2026 г.");
    }

    #[test]
    fn test_day_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(format_ru_date(date), "воскресенье, 2 марта 2025 г.");
    }
}
