use anyhow::Result;
use owo_colors::OwoColorize;
use rdv_core::session::SessionStore;

pub fn run() -> Result<()> {
    let store = SessionStore::open_default()?;
    store.clear()?;

    println!("{}", "Session effacée.".dimmed());

    Ok(())
}
