use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    report_warnings, ConfigCommand, ListCommand, MoveArgs, RandomArgs, RemoveArgs,
    SearchCommand, ShowArgs,
};
use config::Config;
use meallab_core::{JsonFileStorage, ListName, ListStore};

#[derive(Parser)]
#[command(name = "meallab")]
#[command(version)]
#[command(about = "Browse TheMealDB and keep Favorites and Cooked lists", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by ingredient or name
    Search(SearchCommand),

    /// Show full details for a meal
    Show(ShowArgs),

    /// Show a random meal
    Random(RandomArgs),

    /// Manage the Favorites list
    Favorites(ListCommand),

    /// Manage the Cooked list
    Cooked(ListCommand),

    /// Move a meal from Favorites to Cooked
    Move(MoveArgs),

    /// Remove a meal from Favorites and Cooked
    Remove(RemoveArgs),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meallab=warn,meallab_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config commands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;

    // Only open the lists for commands that read or change them
    let mut store = if uses_lists(&cli.command) {
        let store = ListStore::load(JsonFileStorage::new(config.data_dir.value.clone()));
        tracing::debug!(data_dir = %store.storage().data_dir().display(), "opened lists");
        Some(store)
    } else {
        None
    };

    let result = execute_command(&cli.command, &config, store.as_mut(), cli_config_path).await;

    // Warnings are reported even when the command itself failed
    if let Some(store) = store.as_mut() {
        report_warnings(store);
    }

    result
}

async fn execute_command(
    command: &Option<Commands>,
    config: &Config,
    store: Option<&mut ListStore>,
    cli_config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match (command, store) {
        (Some(Commands::Search(cmd)), _) => {
            cmd.run(&config.catalog_client()?, config).await?;
        }
        (Some(Commands::Show(cmd)), _) => {
            cmd.run(&config.catalog_client()?).await?;
        }
        (Some(Commands::Random(cmd)), store) => {
            cmd.run(&config.catalog_client()?, store).await?;
        }
        (Some(Commands::Favorites(cmd)), Some(store)) => {
            cmd.run(ListName::Favorites, store, || config.catalog_client())
                .await?;
        }
        (Some(Commands::Cooked(cmd)), Some(store)) => {
            cmd.run(ListName::Cooked, store, || config.catalog_client())
                .await?;
        }
        (Some(Commands::Move(cmd)), Some(store)) => {
            cmd.run(store)?;
        }
        (Some(Commands::Remove(cmd)), Some(store)) => {
            cmd.run(store)?;
        }
        (Some(Commands::Config(cmd)), _) => {
            cmd.run(config, cli_config_path)?;
        }
        (Some(_), None) => {
            return Err("list storage was not opened".into());
        }
        (None, _) => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Returns true if the command reads or writes the Favorites/Cooked lists.
fn uses_lists(cmd: &Option<Commands>) -> bool {
    match cmd {
        Some(Commands::Random(random)) => random.uses_lists(),
        Some(
            Commands::Favorites(_) | Commands::Cooked(_) | Commands::Move(_) | Commands::Remove(_),
        ) => true,
        _ => false,
    }
}
