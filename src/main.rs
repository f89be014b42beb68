//! Servicios CLI - terminal form for delivery service records

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use servicios::config::{self, ServiciosConfig, Settings};
use servicios::form::{FormController, Notifier};
use servicios::record::ServiceRecord;
use servicios::shell::{search_once, Shell, TerminalNotifier};
use servicios::storage::RecordStore;
use servicios::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "servicios")]
#[command(version)]
#[command(about = "Manage delivery service records stored in a local SQLite file")]
#[command(long_about = r#"
Servicios keeps delivery jobs (name, pickup address, delivery address,
phone, amount to collect) in a single SQLite file.

Example usage:
  servicios                     open the interactive form
  servicios list --json         dump every service
  servicios search Ana          services whose name contains "Ana"
  echo "all" | servicios form   run form commands from a pipe
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the form (interactive on a terminal, reads commands from stdin otherwise)
    Form,

    /// Print every service
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print services whose name contains TERM
    Search {
        term: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with the current settings
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps the form output clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config.as_ref(), cli.database.as_deref());
    tracing::debug!(?settings, "resolved settings");

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
            let form = open_form(&settings, TerminalNotifier::new(interactive))?;
            let mut shell = Shell::new(form, settings.title.clone(), interactive);

            if interactive {
                shell.run_interactive()?;
            } else {
                shell.run_script(std::io::stdin().lock())?;
                shell.render();
            }
        }

        Commands::List { json } => {
            let form = open_form(&settings, TerminalNotifier::new(false))?;
            print_rows(form.rows(), json)?;
        }

        Commands::Search { term, json } => {
            let mut form = open_form(&settings, TerminalNotifier::new(false))?;
            if let Some(rows) = search_once(&mut form, term) {
                print_rows(rows, json)?;
            }
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            let contents = ServiciosConfig {
                database: Some(settings.database.display().to_string()),
                title: Some(settings.title.clone()),
                case_sensitive_search: Some(settings.case_sensitive_search),
            };
            config::write_config(&path, &contents, force)?;
            ui::success(&format!("Config written to {}", path.display()));
        }
    }

    Ok(())
}

fn open_form<N: Notifier>(settings: &Settings, notifier: N) -> anyhow::Result<FormController<N>> {
    let store = RecordStore::open(&settings.database)?;
    if settings.case_sensitive_search {
        store.set_case_sensitive_search(true)?;
    }
    tracing::info!("Using database {}", settings.database.display());
    Ok(FormController::new(store, notifier))
}

fn print_rows(rows: &[ServiceRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{}", ui::render_services(rows, None));
    }
    Ok(())
}
