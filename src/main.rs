use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use healthreg::{
    ApiClient, Client, InteractiveRegistry, NewClient, Program, Settings, SettingsManager,
    logging::{self, LogTarget},
    output::{self, OutputFormat},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "healthreg",
    version,
    about = "Terminal client for the health program and client registry",
    long_about = None
)]
struct Cli {
    /// Base address of the registry API
    #[arg(long, env = "HEALTHREG_API_BASE")]
    api_base: Option<String>,

    /// API key sent in the X-API-KEY header
    #[arg(long, env = "HEALTHREG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Settings file (default: <config dir>/healthreg/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log file for interactive mode (default: <cache dir>/healthreg/healthreg.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Output format for one-shot commands
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage health programs
    Programs {
        #[command(subcommand)]
        action: ProgramAction,
    },
    /// Manage registered clients
    Clients {
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Search clients by name
    Search {
        /// Search text, sent as-is
        query: String,
    },
}

#[derive(Subcommand)]
enum ProgramAction {
    /// List all programs
    List,
    /// Create a program
    Add { name: String },
    /// Delete a program
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum ClientAction {
    /// List all clients
    List,
    /// Register a client
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Program id to enroll in, repeatable
        #[arg(long = "program")]
        programs: Vec<i64>,
    },
    /// Delete a client
    Rm { id: i64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_target = if cli.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File(cli.log_file.clone().unwrap_or_else(logging::default_log_file))
    };
    logging::init_tracing(log_target)?;

    let manager = match &cli.config {
        Some(path) => SettingsManager::with_path(path.clone()),
        None => SettingsManager::new()?,
    };
    let settings = manager
        .load()?
        .with_overrides(cli.api_base.clone(), cli.api_key.clone(), cli.timeout);
    tracing::debug!(config = %manager.config_path().display(), api_base = %settings.api_base, "settings loaded");

    let client = ApiClient::new(settings.api_config()).context("Failed to build HTTP client")?;

    let Some(command) = cli.command else {
        let mut app = InteractiveRegistry::with_timings(
            client,
            settings.search_debounce_ms,
            settings.message_clear_delay_ms,
        );
        return app.run();
    };

    run_command(&client, command, &settings, cli.format, !cli.no_color)
}

/// What a one-shot command got back from the API.
enum Fetched {
    Programs(Vec<Program>),
    Clients(Vec<Client>),
    Deleted(&'static str, i64),
}

fn fetch(client: &ApiClient, command: Commands) -> Result<Fetched> {
    let fetched = match command {
        Commands::Programs { action } => match action {
            ProgramAction::List => {
                Fetched::Programs(client.list_programs().context("Failed to list programs")?)
            }
            ProgramAction::Add { name } => Fetched::Programs(vec![
                client
                    .create_program(&name)
                    .context("Failed to create program")?,
            ]),
            ProgramAction::Rm { id } => {
                client
                    .delete_program(id)
                    .with_context(|| format!("Failed to delete program {id}"))?;
                Fetched::Deleted("Program", id)
            }
        },
        Commands::Clients { action } => match action {
            ClientAction::List => {
                Fetched::Clients(client.list_clients().context("Failed to list clients")?)
            }
            ClientAction::Add {
                name,
                email,
                programs,
            } => Fetched::Clients(vec![
                client
                    .create_client(&NewClient {
                        name,
                        email,
                        programs,
                    })
                    .context("Failed to register client")?,
            ]),
            ClientAction::Rm { id } => {
                client
                    .delete_client(id)
                    .with_context(|| format!("Failed to delete client {id}"))?;
                Fetched::Deleted("Client", id)
            }
        },
        Commands::Search { query } => Fetched::Clients(
            client
                .search_clients(&query)
                .context("Failed to search clients")?,
        ),
    };
    Ok(fetched)
}

fn run_command(
    client: &ApiClient,
    command: Commands,
    settings: &Settings,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let spinner = spinner(&settings.api_base);
    let fetched = fetch(client, command);
    spinner.finish_and_clear();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match fetched? {
        Fetched::Programs(programs) => {
            output::write_programs(&mut handle, &programs, format, use_color)?;
        }
        Fetched::Clients(clients) => {
            output::write_clients(&mut handle, &clients, format, use_color)?;
        }
        Fetched::Deleted(what, id) => output::write_deleted(&mut handle, what, id, format)?,
    }
    handle.flush()?;
    Ok(())
}

fn spinner(api_base: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Contacting {api_base}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
