//! API Console - Main Entry Point
//!
//! Loads settings and the operation catalog, then lists, shows or executes
//! operations. Responses go to stdout as JSON; logs and the summary line go
//! to stderr.

mod cli;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use apiconsole_application::{ApplicationError, ConsoleSession, ExecuteOperation};
use apiconsole_domain::{Catalog, ConsoleSettings};
use apiconsole_infrastructure::{
    ReqwestHttpClient, SettingsError, SettingsRepository, load_catalog, to_json_stable,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, ExecArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli).await?;

    let catalog_path = settings.catalog_path.clone().ok_or_else(|| {
        ApplicationError::Configuration(
            "no catalog given; pass --catalog or set APICONSOLE_CATALOG".to_string(),
        )
    })?;
    let catalog = load_catalog(&catalog_path).await?;

    match cli.command {
        Command::List => print!("{}", render::render_list(&catalog)),
        Command::Show { id } => {
            let operation = catalog
                .get(&id)
                .ok_or(ApplicationError::UnknownOperation(id))?;
            print!("{}", render::render_operation(operation));
        }
        Command::Exec(args) => execute(settings, catalog, args).await?,
    }

    Ok(())
}

/// Settings file, then environment, then command-line flags.
async fn resolve_settings(cli: &Cli) -> Result<ConsoleSettings, SettingsError> {
    let repository = cli
        .settings
        .clone()
        .map_or_else(SettingsRepository::new, SettingsRepository::with_path);

    let mut settings = repository.load_with_env().await?;
    if let Some(proxy_base) = &cli.proxy_base {
        settings.proxy_base.clone_from(proxy_base);
    }
    if let Some(catalog) = &cli.catalog {
        settings.catalog_path = Some(catalog.clone());
    }

    settings.validate()?;
    tracing::debug!(
        proxy_base = %settings.proxy_base,
        catalog = ?settings.catalog_path,
        "settings resolved"
    );
    Ok(settings)
}

async fn execute(
    settings: ConsoleSettings,
    catalog: Catalog,
    args: ExecArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ReqwestHttpClient::new(&settings.user_agent).map_err(ApplicationError::from)?;
    let executor = ExecuteOperation::new(Arc::new(client), settings.proxy_base);
    let mut session = ConsoleSession::new(executor, catalog);
    session.select(&args.id)?;

    let body_text = read_body(args.body, args.body_file).await?;
    let draft = session.draft_mut();
    draft.input.path.extend(args.path);
    draft.input.query.extend(args.query);
    draft.input.header.extend(args.header);
    if let Some(body_text) = body_text {
        draft.body_text = body_text;
    }
    session.set_auth_token(args.token.as_deref());

    let response = session.execute().await?;

    print!("{}", to_json_stable(&response)?);
    eprintln!("{}", render::render_summary(&response));
    Ok(())
}

async fn read_body(
    inline: Option<String>,
    file: Option<PathBuf>,
) -> std::io::Result<Option<String>> {
    match (inline, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => tokio::fs::read_to_string(path).await.map(Some),
        (None, None) => Ok(None),
    }
}
