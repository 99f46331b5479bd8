use anyhow::Result;
use owo_colors::OwoColorize;
use rdv_core::session::SessionStore;

pub fn run() -> Result<()> {
    let store = SessionStore::open_default()?;

    match store.current_user()? {
        Some(user) => {
            println!("{} <{}>", user.username.bold(), user.email);
            if store.token()?.is_none() {
                println!("{}", "Aucun jeton enregistré, reconnectez-vous.".yellow());
            }
        }
        None => println!("{}", "Non connecté".dimmed()),
    }

    Ok(())
}
