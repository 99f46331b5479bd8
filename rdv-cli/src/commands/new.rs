use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::Input;
use owo_colors::OwoColorize;
use rdv_core::config::GlobalConfig;
use rdv_core::gateway::RestGateway;
use rdv_core::schedule::{self, EventForm};
use rdv_core::session::SessionStore;

use crate::store::{Agenda, AgendaEntry};
use crate::utils::tui;

pub async fn run(title: Option<String>, from: Option<String>, to: Option<String>) -> Result<()> {
    // A selected range pre-fills the form, split into date and time fields.
    // All-day selections carry no time part and leave the time fields empty.
    let (start_date_hint, start_time_hint) = split_selection(from.as_deref());
    let (end_date_hint, end_time_hint) = split_selection(to.as_deref());

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Titre").interact_text()?,
    };

    let start_date = prompt_date("Date début (AAAA-MM-JJ)", &start_date_hint)?;

    let end_date_hint = if end_date_hint.is_empty() {
        start_date.format("%Y-%m-%d").to_string()
    } else {
        end_date_hint
    };
    let end_date = prompt_date("Date fin (AAAA-MM-JJ)", &end_date_hint)?;

    let start_time = prompt_time("Heure début (HH:MM, vide = journée)", &start_time_hint)?;
    let end_time = prompt_time("Heure fin (HH:MM, vide = journée)", &end_time_hint)?;

    let form = EventForm {
        title,
        start_date,
        end_date,
        start_time,
        end_time,
        description: None,
    };

    let config = GlobalConfig::load()?;
    let gateway = RestGateway::new(config.api_url);
    let store = SessionStore::open_default()?;

    let spinner = tui::spinner("Création de l'événement...");
    let result = schedule::create_event(&gateway, &store, &form).await;
    spinner.finish_and_clear();

    let event = result?;

    // Optimistic merge: the new event joins the displayed set without a
    // re-fetch from the backend.
    let mut agenda = Agenda::open_default()?;
    agenda.insert(AgendaEntry::from_event(&event))?;

    println!(
        "{}",
        format!("Événement créé avec succès: {} [{}]", event.title, event.id).green()
    );

    Ok(())
}

/// Prompt for a calendar date, retrying on parse errors.
fn prompt_date(prompt: &str, hint: &str) -> Result<NaiveDate> {
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if !hint.is_empty() {
            input = input.default(hint.to_string());
        }
        let value = input.interact_text()?;

        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => eprintln!("  {}", format!("Date invalide: \"{value}\"").red()),
        }
    }
}

/// Prompt for an optional time of day; an empty answer means no time
/// component on that side of the range.
fn prompt_time(prompt: &str, hint: &str) -> Result<Option<NaiveTime>> {
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if !hint.is_empty() {
            input = input.default(hint.to_string());
        }
        let value = input.interact_text()?;
        let value = value.trim();

        if value.is_empty() {
            return Ok(None);
        }
        match NaiveTime::parse_from_str(value, "%H:%M") {
            Ok(time) => return Ok(Some(time)),
            Err(_) => eprintln!("  {}", format!("Heure invalide: \"{value}\"").red()),
        }
    }
}

/// Split a selection string into the form's date and time fields
/// ("2024-01-01T09:30" becomes ("2024-01-01", "09:30"); a bare date has no
/// time part).
fn split_selection(selection: Option<&str>) -> (String, String) {
    match selection {
        Some(s) => match s.split_once('T') {
            Some((date, time)) => (date.to_string(), time.chars().take(5).collect()),
            None => (s.to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    }
}
