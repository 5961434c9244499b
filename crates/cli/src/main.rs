//! `rowfetch` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve` — start the API server.
//! - `fetch` — read the table once and print it as JSON.
//!
//! Configuration comes from flags, then environment variables, then a
//! `.env` file in the working directory, then built-in defaults.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::config::{DEFAULT_DATABASE_URL, DEFAULT_TABLE};
use db::DbConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rowfetch",
    about = "Serve the rows of one SQL table as JSON",
    version
)]
struct Cli {
    /// Database URL (`postgres://…` or `sqlite://…`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = DEFAULT_DATABASE_URL,
        hide_env_values = true,
        hide_default_value = true,
        global = true
    )]
    database_url: String,

    /// Table to read. Its rows are always served at `/users`.
    #[arg(long, env = "ROWFETCH_TABLE", default_value = DEFAULT_TABLE, global = true)]
    table: String,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Fetch every row once and print the JSON array to stdout.
    Fetch {
        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Validate the connection settings; an invalid table name stops here,
    /// before anything connects or binds.
    fn db_config(&self) -> Result<DbConfig> {
        DbConfig::new(self.database_url.clone(), self.table.clone()).context("invalid configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = cli.db_config()?;

    match cli.command {
        Command::Serve { bind } => {
            api::serve(&bind, config)
                .await
                .with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Fetch { pretty } => {
            info!(database = %config.redacted_url(), table = config.table(), "Fetching rows");
            let rows = db::repository::users::fetch_all(&config)
                .await
                .context("failed to fetch rows")?;

            let out = if pretty {
                serde_json::to_string_pretty(&rows)?
            } else {
                serde_json::to_string(&rows)?
            };
            println!("{out}");
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so `fetch` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
