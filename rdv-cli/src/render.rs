//! Terminal rendering helpers for agenda events.

use chrono::{Datelike, Local, NaiveDate};
use rdv_core::Event;

static WEEKDAYS: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];
static MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Short French date, fr-FR style (e.g. "jeu. 25 avr. 2024").
pub fn format_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday} {:02} {month} {}", date.day(), date.year())
}

/// Day header label for the agenda listing.
pub fn date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Aujourd'hui".to_string(),
        1 => "Demain".to_string(),
        _ => format_date(date),
    }
}

/// Time column of an agenda line ("09:00", right-aligned, or the all-day
/// marker).
pub fn time_label(event: &Event) -> String {
    if event.all_day {
        "journée".to_string()
    } else {
        format!("{:>7}", event.start.with_timezone(&Local).format("%H:%M"))
    }
}
