//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Browse an operation catalog and send requests through the API proxy.
#[derive(Parser, Debug)]
#[command(name = "apiconsole", version, about)]
pub struct Cli {
    /// Catalog file (.json, .yaml or .yml)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Proxy base every request URL starts with
    #[arg(long, global = true, value_name = "URL")]
    pub proxy_base: Option<String>,

    /// Settings file to use instead of the platform config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog operations in order
    List,

    /// Show one operation and its default draft
    Show {
        /// Operation id
        id: String,
    },

    /// Execute one operation and print the response
    Exec(ExecArgs),
}

/// Arguments of `exec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Operation id
    pub id: String,

    /// Path parameter value
    #[arg(long = "path", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub path: Vec<(String, String)>,

    /// Query parameter value
    #[arg(long = "query", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub query: Vec<(String, String)>,

    /// Header parameter value
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub header: Vec<(String, String)>,

    /// Request body text (replaces the default body)
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body text from a file
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Bearer token
    #[arg(long, env = "APICONSOLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Splits `name=value` on the first `=`. The value may be empty.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}
