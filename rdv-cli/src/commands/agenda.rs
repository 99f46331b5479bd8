use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render;
use crate::store::Agenda;

pub fn run() -> Result<()> {
    let agenda = Agenda::open_default()?;

    let mut events = Vec::new();
    for entry in agenda.entries() {
        events.push(entry.to_event()?);
    }

    events.sort_by_key(|e| e.start);

    if events.is_empty() {
        println!("{}", "Aucun événement".dimmed());
        return Ok(());
    }

    // Group events by day
    let mut current_label: Option<String> = None;

    for event in &events {
        let date = event.start.with_timezone(&Local).date_naive();
        let label = render::date_label(date);

        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_label = Some(label);
        }

        let time = render::time_label(event);
        let id_tag = format!("[{}]", event.id);
        let mut line = format!("  {} {} {}", time, event.title, id_tag.dimmed());

        match event.participants.len() {
            0 => {}
            1 => line.push_str(&format!(" {}", "(1 participant)".dimmed())),
            n => line.push_str(&format!(" {}", format!("({n} participants)").dimmed())),
        }

        println!("{line}");
    }

    Ok(())
}
