mod commands;
mod render;
mod store;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rdv")]
#[command(about = "Ton agenda partagé, depuis le terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Créer un compte
    Register {
        /// Nom d'utilisateur (demandé si absent)
        #[arg(short, long)]
        username: Option<String>,

        /// Adresse e-mail (demandée si absente)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Se connecter
    Login {
        /// Adresse e-mail (demandée si absente)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Se déconnecter (efface la session locale)
    Logout,
    /// Afficher l'utilisateur connecté
    Whoami,
    /// Créer un événement
    New {
        /// Titre de l'événement (demandé si absent)
        title: Option<String>,

        /// Début de la sélection (AAAA-MM-JJ ou AAAA-MM-JJTHH:MM)
        #[arg(long)]
        from: Option<String>,

        /// Fin de la sélection (AAAA-MM-JJ ou AAAA-MM-JJTHH:MM)
        #[arg(long)]
        to: Option<String>,
    },
    /// Afficher l'agenda
    Agenda,
    /// Détails d'un événement
    Show { event_id: String },
    /// Basculer ma participation à un événement
    Join { event_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Register { username, email } => commands::register::run(username, email).await,
        Commands::Login { email } => commands::login::run(email).await,
        Commands::Logout => commands::logout::run(),
        Commands::Whoami => commands::whoami::run(),
        Commands::New { title, from, to } => commands::new::run(title, from, to).await,
        Commands::Agenda => commands::agenda::run(),
        Commands::Show { event_id } => commands::show::run(&event_id),
        Commands::Join { event_id } => commands::join::run(&event_id),
    }
}
