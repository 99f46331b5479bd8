use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use rdv_core::auth::{self, LoginForm};
use rdv_core::config::GlobalConfig;
use rdv_core::gateway::RestGateway;
use rdv_core::session::SessionStore;

use crate::utils::tui;

pub async fn run(email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Adresse e-mail").interact_text()?,
    };
    let password = rpassword::prompt_password("Mot de passe: ")?;

    let config = GlobalConfig::load()?;
    let gateway = RestGateway::new(config.api_url);
    let store = SessionStore::open_default()?;

    let form = LoginForm { email, password };

    let spinner = tui::spinner("Connexion...");
    let result = auth::login(&gateway, &store, &form).await;
    spinner.finish_and_clear();

    let outcome = result?;

    // Overwrites any previous account record
    if let Some(user) = &outcome.user {
        store.set_current_user(user)?;
    }

    println!("{}", "Connexion réussie !".green());

    Ok(())
}
