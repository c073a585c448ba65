//! Arsip CLI: browse, upload to and manage the document archive.
//!
//! Configuration comes from the environment (or `.env`); see `Config::from_env`.

use anyhow::Context;
use arsip_classifier::create_classifier;
use arsip_cli::{confirm, error_report, file_metadata, init_tracing, log_error, DELETE_PROMPT};
use arsip_core::{seed, Action, ArchiveError, ArchiveResult, Config, RecordId, Session};
use arsip_services::{
    filter_and_sort, ArchiveQuery, ArchiveStore, Authenticator, CategoryFilter, DashboardStats,
    DeleteOutcome, FixedRoster, SortOrder, UploadWorkflow,
};
use arsip_storage::create_blob_store;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "arsip", about = "Document archive CLI")]
struct Cli {
    /// Id of the roster user to act as (see `arsip users`)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the users that can log in
    Users,
    /// List archive records
    List {
        /// Case-insensitive match on file name or tag
        #[arg(long, default_value = "")]
        search: String,
        /// Category label, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// desc (newest first) or asc
        #[arg(long, default_value = "desc")]
        sort: SortOrder,
    },
    /// Show a single record
    Show {
        /// Record id
        id: String,
    },
    /// Classify a file and save it to the archive
    Upload {
        /// Path to the file
        path: PathBuf,
        /// MIME type, guessed from the extension when omitted
        #[arg(long = "type")]
        file_type: Option<String>,
        /// Save without asking
        #[arg(long)]
        yes: bool,
    },
    /// Delete a record (admin only)
    Delete {
        /// Record id
        id: String,
        /// Delete without asking
        #[arg(long)]
        yes: bool,
    },
    /// Dashboard statistics
    Stats,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn login(roster: &FixedRoster, user: Option<&str>) -> anyhow::Result<Session> {
    let user_id = user.context("Pass --user <id>; run `arsip users` to see who can log in")?;
    Ok(roster.login(user_id)?)
}

fn ask(prompt: &str) -> bool {
    let stdin = io::stdin();
    confirm(prompt, &mut stdin.lock(), &mut io::stderr()).unwrap_or(false)
}

async fn open_store(config: &Config) -> anyhow::Result<ArchiveStore> {
    let blob_store = create_blob_store(config)
        .await
        .context("Failed to initialize blob storage")?;
    let seed = if config.seed_demo_data {
        seed::seed_records()
    } else {
        Vec::new()
    };
    Ok(ArchiveStore::open(blob_store, config.archive_blob_key.clone(), seed).await)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    let production = config.as_ref().is_ok_and(Config::is_production);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&err);
            if let Err(print_err) = print_json(&error_report(&err, production)) {
                eprintln!("{:#}", print_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: ArchiveResult<Config>) -> anyhow::Result<()> {
    let config = config.context("Failed to load configuration")?;
    config.validate()?;

    let roster = FixedRoster::default();

    if let Commands::Users = cli.command {
        return print_json(&roster.users());
    }

    let session = login(&roster, cli.user.as_deref())?;
    let mut store = open_store(&config).await?;
    tracing::debug!(
        user_id = %session.user_id(),
        rehydration = ?store.rehydration(),
        records = store.len(),
        "Archive opened"
    );

    match cli.command {
        Commands::Users => {}
        Commands::List {
            search,
            category,
            sort,
        } => {
            session.require(Action::BrowseArchive)?;
            let query = ArchiveQuery::default()
                .search(search)
                .category(category)
                .sort(sort);
            print_json(&filter_and_sort(store.records(), &query))?;
        }
        Commands::Show { id } => {
            session.require(Action::BrowseArchive)?;
            let record = store
                .get(&RecordId::new(id.as_str()))
                .ok_or_else(|| ArchiveError::NotFound(format!("Record {}", id)))?;
            print_json(record)?;
        }
        Commands::Upload {
            path,
            file_type,
            yes,
        } => {
            let mut workflow = UploadWorkflow::new(session)?;
            let classifier = create_classifier(&config)?;
            let file = file_metadata(&path, file_type).await?;

            workflow.select_and_classify(file, classifier.as_ref()).await;
            if let Some(error) = workflow.error() {
                eprintln!("{}", error);
            }
            if let Some(result) = workflow.classification() {
                eprintln!("{}", serde_json::to_string_pretty(result)?);
            }

            if !yes && !ask("Simpan ke arsip?") {
                workflow.cancel();
                print_json(&serde_json::json!({ "saved": false }))?;
                return Ok(());
            }

            match workflow.save(&mut store).await? {
                Some(record) => print_json(&record)?,
                None => anyhow::bail!("Nothing to save; classification did not complete"),
            }
        }
        Commands::Delete { id, yes } => {
            let id = RecordId::new(id.as_str());
            let outcome = store
                .delete_as(&session, &id, |record| {
                    yes || ask(&format!("{} ({})", DELETE_PROMPT, record.file_name))
                })
                .await?;

            match outcome {
                DeleteOutcome::Deleted(record) => print_json(&serde_json::json!({
                    "success": true,
                    "message": format!("Record {} deleted", record.id),
                }))?,
                DeleteOutcome::Declined => {
                    print_json(&serde_json::json!({ "success": false, "message": "Cancelled" }))?
                }
                DeleteOutcome::NotFound => {
                    return Err(ArchiveError::NotFound(format!("Record {}", id)).into())
                }
            }
        }
        Commands::Stats => {
            session.require(Action::ViewDashboard)?;
            let stats = DashboardStats::compute(store.records());
            let total_size_mb = stats.total_size_mb();
            print_json(&serde_json::json!({
                "stats": stats,
                "totalSizeMb": total_size_mb,
            }))?;
        }
    }

    Ok(())
}
