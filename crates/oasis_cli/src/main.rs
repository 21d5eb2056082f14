//! `oasis`: manage the Collective Oasis proposal content from a terminal.
//!
//! # Responsibility
//! - Compose configuration, logging, snapshot storage and the content store.
//! - Offer the public gallery (list/show), the PIN-gated editor (edit/reset)
//!   and the proposal export.

use clap::{Parser, Subcommand};
use log::error;
use oasis_core::admin::{encode_image_file, reset_with_confirmation};
use oasis_core::db::open_db;
use oasis_core::{
    default_log_level, init_logging, render_proposal, AdminGate, ContentStore,
    FileSnapshotRepository, Gallery, ImageSource, MemorySnapshotRepository, RecordDraft,
    SnapshotStorage, SqliteSnapshotRepository, StorageBackend, StoreConfig,
};
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Collective Oasis proposal content manager.
#[derive(Parser, Debug)]
#[command(name = "oasis", version, about = "Collective Oasis proposal content manager")]
struct Cli {
    /// Snapshot backend: sqlite, file or memory.
    #[arg(long, global = true, env = "OASIS_STORAGE")]
    storage: Option<String>,

    /// Database or snapshot file path.
    #[arg(long = "db-path", global = true, env = "OASIS_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long = "log-dir", global = true, env = "OASIS_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List gallery cards.
    List,

    /// Show one record with its sub-items.
    Show {
        /// Record id.
        id: String,
    },

    /// Edit a record (requires the admin PIN).
    Edit {
        /// Record id.
        id: String,
        /// Admin PIN.
        #[arg(long, env = "OASIS_PIN")]
        pin: String,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New cover image URL.
        #[arg(long = "image-url", conflicts_with = "image_file")]
        image_url: Option<String>,
        /// New cover image from a local file (max 2 MB).
        #[arg(long = "image-file")]
        image_file: Option<PathBuf>,
        /// Sub-item photo as SUB_ID=PATH; repeatable.
        #[arg(long = "sub-image", value_name = "SUB_ID=PATH")]
        sub_images: Vec<String>,
    },

    /// Reset all content to the shipped defaults (requires the admin PIN).
    Reset {
        /// Admin PIN.
        #[arg(long, env = "OASIS_PIN")]
        pin: String,
        /// Skip the confirmation prompt.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Render the proposal document as Markdown.
    Export {
        /// Output file; stdout when omitted.
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let mut config = StoreConfig::from_env()?;
    if let Some(storage) = cli.storage.as_deref() {
        config.backend = storage.parse()?;
    }
    if let Some(path) = cli.db_path {
        config.path = path;
    }

    match config.backend {
        StorageBackend::Sqlite => {
            let conn = open_db(&config.path)?;
            execute(cli.command, &config, SqliteSnapshotRepository::new(&conn))
        }
        StorageBackend::File => execute(
            cli.command,
            &config,
            FileSnapshotRepository::new(config.path.clone()),
        ),
        StorageBackend::Memory => {
            execute(cli.command, &config, MemorySnapshotRepository::new())
        }
    }
}

fn execute<S: SnapshotStorage>(command: Commands, config: &StoreConfig, storage: S) -> CliResult {
    let mut store = ContentStore::open(storage);
    let gate = AdminGate::new(config.admin_pin.clone());

    match command {
        Commands::List => {
            for card in Gallery::new(store.records()).cards() {
                let extra = match card.sub_item_count {
                    0 => String::new(),
                    count => format!(" [{count} sub-items]"),
                };
                println!("{:>3}  {}{extra}", card.id, card.name);
                println!("     {}", card.image_label);
            }
            Ok(())
        }
        Commands::Show { id } => {
            let mut gallery = Gallery::new(store.records());
            let detail = gallery
                .select(&id)
                .ok_or_else(|| format!("no record with id `{id}`"))?;
            let record = detail.record;
            println!("{} ({})", record.name, record.id);
            println!("image: {}", ImageSource::classify(&record.image).label());
            println!();
            println!("{}", record.description);
            for sub in detail.sub_items() {
                println!(
                    "  - {} {}: {}",
                    sub.id,
                    sub.name,
                    ImageSource::classify(&sub.image).label()
                );
            }
            Ok(())
        }
        Commands::Edit {
            id,
            pin,
            description,
            image_url,
            image_file,
            sub_images,
        } => {
            let session = gate.unlock(&pin)?;
            let record = store
                .get(&id)
                .ok_or_else(|| format!("no record with id `{id}`"))?;
            let mut draft = RecordDraft::from_record(record);

            if let Some(description) = description {
                draft.set_description(description);
            }
            if let Some(url) = image_url {
                draft.set_image(url);
            }
            if let Some(path) = image_file {
                draft.set_image(encode_image_file(&path)?);
            }
            for entry in &sub_images {
                let (sub_id, path) = entry
                    .split_once('=')
                    .ok_or_else(|| format!("expected SUB_ID=PATH, got `{entry}`"))?;
                draft.set_sub_image(sub_id, encode_image_file(PathBuf::from(path).as_path())?)?;
            }

            if draft.commit(&session, &mut store) {
                println!("Changes saved for {id}.");
            } else {
                println!("Nothing to save for {id}.");
            }
            Ok(())
        }
        Commands::Reset { pin, yes } => {
            let session = gate.unlock(&pin)?;
            let confirmed = reset_with_confirmation(&session, &mut store, |prompt| {
                yes || confirm_on_terminal(prompt)
            });
            if confirmed {
                println!("All content restored to defaults.");
            } else {
                println!("Reset cancelled.");
            }
            Ok(())
        }
        Commands::Export { out } => {
            let document = render_proposal(store.records());
            match out {
                Some(path) => {
                    std::fs::write(&path, document)?;
                    println!("Proposal written to {}", path.display());
                }
                None => print!("{document}"),
            }
            Ok(())
        }
    }
}

fn confirm_on_terminal(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
