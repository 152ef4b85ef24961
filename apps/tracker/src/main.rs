//! Console tracker: interactive work-ticket management
//!
//! A single interactive session starts on launch and ends when the Exit
//! action is chosen. The storage backend (in-memory or PostgreSQL) is
//! selected at startup via `TRACKER_STORE`.

use std::sync::Arc;

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{ItemStore, MemStore, PgItemStore};
use tracing::info;

mod actions;
mod config;
mod input;
mod output;
mod shell;

use actions::{
    CreateAction, DeleteAction, ExitAction, FindByIdAction, FindByNameAction, ReplaceAction,
    ShowAllAction, UserAction,
};
use config::{Config, StoreBackend};
use input::{ConsoleInput, ValidatedInput};
use output::{ConsoleOutput, Output};
use shell::StartShell;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Environment variables win over the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store: Box<dyn ItemStore> = match config.backend {
        StoreBackend::Memory => {
            info!("Using the in-memory item store");
            Box::new(MemStore::new())
        }
        StoreBackend::Postgres(pg) => {
            info!("Connecting to database...");
            let db = database::postgres::connect_from_config(pg).await?;
            database::postgres::run_migrations::<migration::Migrator>(&db, "tracker").await?;
            Box::new(PgItemStore::new(db))
        }
    };

    let output: Arc<dyn Output> = Arc::new(ConsoleOutput);
    let actions: Vec<Box<dyn UserAction>> = vec![
        Box::new(CreateAction::new(output.clone())),
        Box::new(ShowAllAction::new(output.clone())),
        Box::new(ReplaceAction::new(output.clone())),
        Box::new(DeleteAction::new(output.clone())),
        Box::new(FindByIdAction::new(output.clone())),
        Box::new(FindByNameAction::new(output.clone())),
        Box::new(ExitAction::new(output.clone())),
    ];

    let mut input = ValidatedInput::new(output.clone(), ConsoleInput::new());
    let shell = StartShell::new(output.clone());

    // The backend is released exactly once, on success and error paths alike
    let session = match store.init().await {
        Ok(()) => shell.run(&mut input, store.as_ref(), &actions).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = store.close().await {
        tracing::error!(error = %err, "Failed to close the item store");
    }

    session
}
