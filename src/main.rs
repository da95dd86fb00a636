//! Rentr CLI application entry point
//!
//! This is the main executable for rentr. It provides a command-line
//! interface for searching rental listings, managing saved searches, and an
//! interactive browse session.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! rentr
//! rentr browse downtown
//!
//! # One-shot search with filters
//! rentr search "san francisco" --max-price 4000 --beds 2 --parking
//! rentr search --type house --pet-friendly true --format csv
//!
//! # Save and reuse a search
//! rentr search --type house --save-search houses
//! rentr search -F houses --max-price 4000
//!
//! # Details and favorites
//! rentr show 3
//! rentr favorites
//!
//! # Quiet mode (only output results)
//! rentr -q search downtown
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/rentr/config.toml` on Linux) and can be overridden with
//! `RENTR_*` environment variables. Logging goes to stderr; use `-v`/`-vv`
//! or `RUST_LOG` to raise the level.

use rentr::{
    RentrError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands::{self, search::SearchRequest},
    config::{OutputFormat, RentrConfig},
    output::{OutputWriter, StdoutWriter},
    saved,
    search::FilterCriteria,
    ui::DialoguerInput,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, RentrError>;

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rentr={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Dispatch a parsed command
///
/// # Errors
///
/// Returns `RentrError` if configuration, catalog or saved search loading
/// fails, or any command handler returns an error.
fn run(cli: &Cli, config: &RentrConfig, out: &StdoutWriter) -> Result<()> {
    let quiet = out.is_quiet();
    let command = cli.get_command();

    match &command {
        Commands::Config { command } => return commands::config(config, *command, out),
        Commands::Completions { shell } => {
            commands::completions(*shell, &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let catalog = Catalog::load(catalog_path)?;
    let manager = saved::manager_from_config(config)?;
    let input = DialoguerInput::new();

    match command {
        Commands::Browse { query, criteria, from } => commands::browse(
            catalog,
            &manager,
            query.as_deref(),
            &FilterCriteria::from(&criteria),
            criteria.price_bounds(),
            from.as_deref(),
            &input,
            out,
        ),
        Commands::Search {
            query,
            criteria,
            format,
            saved_args,
        } => {
            let request = SearchRequest {
                query: query.as_deref(),
                criteria: FilterCriteria::from(&criteria),
                price: criteria.price_bounds(),
                from: saved_args.from.as_deref(),
                save_as: saved_args
                    .save_search
                    .as_deref()
                    .map(|name| (name, saved_args.search_desc.as_deref())),
                format: format.map_or(config.format, OutputFormat::from),
                quiet,
            };
            commands::search(&catalog, &manager, &request, out)
        }
        Commands::Show { id } => commands::show(&catalog, &id, out),
        Commands::Favorites => commands::favorites(&catalog, quiet, out),
        Commands::Saved { command } => commands::saved(&manager, &command, &input, out, quiet),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

/// Main entry point for the rentr application
///
/// Parses command-line arguments, initialises logging, loads configuration,
/// and dispatches to the appropriate command handler. Errors are printed and
/// turn into a non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level());

    let config = match RentrConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default configuration");
            RentrConfig::default()
        }
    };

    let out = StdoutWriter::quiet(cli.quiet || config.quiet);

    match run(&cli, &config, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
