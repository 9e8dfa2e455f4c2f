//! jsonstate CLI
//!
//! Command-line interface for managing state files in a directory.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsonstate::{Driver, Record, StoreConfig, StoreError};
use tracing_subscriber::{fmt, EnvFilter};

/// jsonstate CLI
#[derive(Parser, Debug)]
#[command(name = "jsonstate-cli")]
#[command(about = "Create, read, update and delete JSON state files")]
#[command(version)]
struct Args {
    /// Directory holding state files (defaults to the working directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Type name used as the file prefix
    #[arg(short, long, default_value = "json")]
    type_name: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a record and print its identifier
    Create {
        /// The score to store
        #[arg(short, long, allow_negative_numbers = true)]
        score: i64,
    },

    /// Print the raw JSON of a record
    Read {
        /// The record identifier
        id: String,
    },

    /// Replace the score of a record
    Update {
        /// The record identifier
        id: String,

        /// The new score
        #[arg(short, long, allow_negative_numbers = true)]
        score: i64,
    },

    /// Delete a record
    Delete {
        /// The record identifier
        id: String,
    },

    /// Print whether a record exists
    Exists {
        /// The record identifier
        id: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "info,jsonstate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("jsonstate CLI v{}", jsonstate::VERSION);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), StoreError> {
    let mut builder = StoreConfig::builder().type_name(args.type_name);
    if let Some(dir) = args.dir {
        builder = builder.state_dir(dir);
    }

    let mut driver = Driver::open(builder.build())?;
    tracing::debug!(
        type_name = driver.type_name(),
        state_dir = %driver.state_dir().display(),
        "state store ready"
    );
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Commands::Create { score } => {
            let id = driver.create(&Record::new(score))?;
            writeln!(stdout, "{}", id)?;
        }
        Commands::Read { id } => {
            let data = driver.read(&id)?;
            stdout.write_all(&data)?;
            writeln!(stdout)?;
        }
        Commands::Update { id, score } => {
            driver.update(&id, &Record::new(score))?;
        }
        Commands::Delete { id } => {
            driver.delete(&id)?;
        }
        Commands::Exists { id } => {
            writeln!(stdout, "{}", driver.exists(&id))?;
        }
    }

    Ok(())
}
