use anyhow::{Context, Result};
use chrono::Local;
use owo_colors::OwoColorize;
use rdv_core::participation;
use rdv_core::session::SessionStore;

use crate::render;
use crate::store::Agenda;

pub fn run(event_id: &str) -> Result<()> {
    let agenda = Agenda::open_default()?;
    let entry = agenda
        .find(event_id)
        .with_context(|| format!("Événement introuvable: {event_id}"))?;
    let event = entry.to_event()?;

    // The acting user is read synchronously from the session; no network.
    let store = SessionStore::open_default()?;
    let current_user = store.current_user()?;

    println!("{}", event.title.bold());

    let start = event.start.with_timezone(&Local);
    let end = event.end.with_timezone(&Local);

    println!("  Date début : {}", render::format_date(start.date_naive()));
    println!("  Date fin   : {}", render::format_date(end.date_naive()));

    if !event.all_day {
        println!("  Heure début: {}", start.format("%H:%M"));
        println!("  Heure fin  : {}", end.format("%H:%M"));
    }

    if let Some(description) = &event.description {
        println!("  {description}");
    }

    if let Some(user) = &current_user {
        if participation::is_participating(&event.participants, user) {
            println!("\n  {}", "✓ Je participe".green());
        } else {
            println!("\n  {}", "Je ne participe pas".dimmed());
        }
    }

    if !event.participants.is_empty() {
        println!("\n  Participants ({})", event.participants.len());
        for participant in &event.participants {
            let name = if participant.username.is_empty() {
                &participant.email
            } else {
                &participant.username
            };
            let is_self = current_user
                .as_ref()
                .is_some_and(|u| participant.user_id == u.id);

            if is_self {
                println!("    {} {}", name, "(vous)".cyan());
            } else {
                println!("    {name}");
            }
        }
    }

    Ok(())
}
