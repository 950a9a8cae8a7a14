//! # Scout CLI
//!
//! Reads session documents, writes result documents and exit markers against a
//! dashboard data root.

use clap::{Parser, Subcommand, ValueEnum};
use scout_session::config::RuntimeConfig;
use scout_session::grammar::Diagnostic;
use scout_session::logging::{self, codes};
use scout_session::output::ExitStatus;
use scout_session::reader::InMemoryPreferences;
use scout_session::{log_info, SessionExchange, SessionId, SessionMode, SessionRecord, TrialEvent};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Exchange session files with the NeuroScouting dashboard
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// TOML file with exchange and logging preferences
    #[clap(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// folder holding the dashboard folder (overrides configuration)
    #[clap(short = 'd', long, global = true)]
    data_root: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// read the session document for a task and print its events as JSON
    Read {
        #[clap(short, long)]
        task: i32,

        #[clap(short, long, default_value = "")]
        player: String,

        #[clap(short, long, value_enum)]
        mode: ModeArg,

        /// write the JSON here instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// write a result document from a JSON session record
    Write {
        /// JSON `SessionRecord`
        input: PathBuf,

        #[clap(short, long, default_value = "")]
        player: String,

        /// task the session came from; omitted means the random session
        #[clap(short, long)]
        task: Option<i32>,
    },

    /// create the dashboard folders
    Layout,

    /// write the exit marker for a module
    ExitCode {
        #[clap(short, long)]
        module: String,

        #[clap(short, long, value_enum, default_value_t = StatusArg::Success)]
        status: StatusArg,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ModeArg {
    Spatial,
    Inhibition,
    Star,
}

impl From<ModeArg> for SessionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Spatial => SessionMode::Spatial,
            ModeArg::Inhibition => SessionMode::Inhibition,
            ModeArg::Star => SessionMode::Star,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StatusArg {
    Success,
    Error,
}

impl From<StatusArg> for ExitStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Success => ExitStatus::Success,
            StatusArg::Error => ExitStatus::Error,
        }
    }
}

/// JSON printed by `read`
#[derive(Serialize)]
struct ReadOutput<'a> {
    session: String,
    from_bundled: bool,
    events: &'a [TrialEvent],
    diagnostics: &'a [Diagnostic],
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    init_logging(&config)?;
    log::debug!("{}", logging::config::get_config_summary());

    let mut exchange = SessionExchange::new(config.exchange);
    let message = run(&cli.command, &mut exchange)?;
    println!("{}", message);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::from_toml_file(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(root) = &cli.data_root {
        config.exchange.data_root = root.clone();
    }
    Ok(config)
}

/// Library events go through `log` (formatted by `env_logger`) unless
/// structured logging is configured
fn init_logging(config: &RuntimeConfig) -> Result<(), Box<dyn Error>> {
    logging::config::init_runtime_preferences(config.logging.clone())
        .and_then(|_| logging::init_global_logging())
        .map_err(|e| {
            logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &e);
            e.into()
        })
}

/// Execute one command. Returns what to print on success.
fn run(command: &Command, exchange: &mut SessionExchange) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Read {
            task,
            player,
            mode,
            output,
        } => {
            let preferences = InMemoryPreferences::new(*task, player);
            let read = exchange.read_from_folders(&preferences, (*mode).into())?;

            let json = serde_json::to_string_pretty(&ReadOutput {
                session: read.session_id.name(),
                from_bundled: read.from_bundled,
                events: &read.events,
                diagnostics: &read.diagnostics,
            })?;

            match output {
                Some(path) => {
                    fs::write(path, json)?;
                    Ok(format!("{} events written to {}", read.events.len(), path.display()))
                }
                None => Ok(json),
            }
        }

        Command::Write {
            input,
            player,
            task,
        } => {
            let record: SessionRecord = serde_json::from_str(&fs::read_to_string(input)?)?;
            let session = match task {
                Some(task) => SessionId::from_task_number(*task)
                    .ok_or_else(|| format!("task {} is outside 1..=6", task))?,
                None => SessionId::Random,
            };

            exchange.set_player(player);
            exchange.set_session_id(Some(session));
            exchange.prepare_folders()?;

            let now = chrono::Local::now().naive_local();
            let path = exchange.write(&record, &now)?;
            Ok(path.display().to_string())
        }

        Command::Layout => {
            exchange.prepare_folders()?;
            log_info!("Layout checked", "dashboard" => exchange.paths().dashboard().display());
            let folders: Vec<String> = exchange
                .paths()
                .all_folders()
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            Ok(folders.join("\n"))
        }

        Command::ExitCode { module, status } => {
            exchange.prepare_folders()?;
            let path = exchange.write_exit_code(module, (*status).into())?;
            Ok(path.display().to_string())
        }
    }
}
