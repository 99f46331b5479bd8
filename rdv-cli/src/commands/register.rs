use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use rdv_core::auth::{self, RegisterForm};
use rdv_core::config::GlobalConfig;
use rdv_core::gateway::RestGateway;
use rdv_core::session::SessionStore;

use crate::utils::tui;

pub async fn run(username: Option<String>, email: Option<String>) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Nom d'utilisateur")
            .interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Adresse e-mail").interact_text()?,
    };
    let password = rpassword::prompt_password("Mot de passe: ")?;
    let confirm_password = rpassword::prompt_password("Confirmer le mot de passe: ")?;

    let config = GlobalConfig::load()?;
    let gateway = RestGateway::new(config.api_url);
    let store = SessionStore::open_default()?;

    let form = RegisterForm {
        username,
        email,
        password,
        confirm_password,
    };

    let spinner = tui::spinner("Inscription...");
    let result = auth::register(&gateway, &store, &form).await;
    spinner.finish_and_clear();

    let outcome = result?;

    if let Some(user) = &outcome.user {
        store.set_current_user(user)?;
    }

    println!("{}", "Inscription réussie !".green());

    Ok(())
}
