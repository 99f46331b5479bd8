use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rdv_core::participation;
use rdv_core::session::SessionStore;

use crate::store::Agenda;

pub fn run(event_id: &str) -> Result<()> {
    let store = SessionStore::open_default()?;
    let Some(user) = store.current_user()? else {
        anyhow::bail!("Vous devez être connecté pour rejoindre un événement");
    };

    let mut agenda = Agenda::open_default()?;
    let entry = agenda
        .find(event_id)
        .cloned()
        .with_context(|| format!("Événement introuvable: {event_id}"))?;
    let mut event = entry.to_event()?;

    let joined = participation::toggle(&mut event, &user);

    // The surface owns persistence of the new sequence; it stays local to
    // the displayed set, nothing is pushed to the backend.
    agenda.set_participants(event_id, &event.participants)?;

    if joined {
        println!("{}", "✓ Je participe".green());
    } else {
        println!("{}", "Participation retirée".dimmed());
    }

    match event.participants.len() {
        0 => {}
        1 => println!("{}", "1 participant".dimmed()),
        n => println!("{}", format!("{n} participants").dimmed()),
    }

    Ok(())
}
