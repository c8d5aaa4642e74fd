//! FileDB CLI
//!
//! Command-line interface for inspecting and editing a FileDB database.

use std::process;

use clap::{Parser, Subcommand};
use filedb::{Config, Database, FileDbError};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// FileDB CLI
#[derive(Parser, Debug)]
#[command(name = "filedb-cli")]
#[command(about = "CLI for the FileDB document store")]
#[command(version)]
struct Args {
    /// Directory containing the database (defaults to the working directory)
    #[arg(short, long)]
    base_dir: Option<String>,

    /// Database directory name (overrides DB_NAME)
    #[arg(short, long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database root if it does not exist
    Init,

    /// List collection names
    Collections,

    /// Create a document (fails if it exists)
    Create {
        collection: String,
        doc_id: String,
        /// Document body as JSON
        json: String,
    },

    /// Print a document, or null
    Get { collection: String, doc_id: String },

    /// Merge JSON into an existing document
    Update {
        collection: String,
        doc_id: String,
        /// Fields to merge, as JSON
        json: String,
    },

    /// Delete a document
    Delete { collection: String, doc_id: String },

    /// Print every document in a collection
    List { collection: String },

    /// Remove a collection and its documents
    Drop { collection: String },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filedb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> filedb::Result<()> {
    let mut config = Config::from_env();
    if let Some(base_dir) = args.base_dir {
        config.base_dir = base_dir.into();
    }
    if let Some(db) = args.db {
        config.database_name = db;
    }

    let db = Database::open(config)?;

    match args.command {
        Commands::Init => {
            tracing::info!("FileDB v{} at {}", filedb::VERSION, db.root().display());
        }
        Commands::Collections => {
            print_json(&Value::from(db.list_collections()?))?;
        }
        Commands::Create {
            collection,
            doc_id,
            json,
        } => {
            let data = parse_json(&json)?;
            print_json(&db.collection(&collection)?.create(&doc_id, &data)?)?;
        }
        Commands::Get { collection, doc_id } => {
            let doc = db.collection(&collection)?.get(&doc_id);
            print_json(&doc.unwrap_or(Value::Null))?;
        }
        Commands::Update {
            collection,
            doc_id,
            json,
        } => {
            let data = parse_json(&json)?;
            print_json(&db.collection(&collection)?.update(&doc_id, &data)?)?;
        }
        Commands::Delete { collection, doc_id } => {
            let deleted = db.collection(&collection)?.delete(&doc_id);
            print_json(&Value::Bool(deleted))?;
        }
        Commands::List { collection } => {
            let docs: Vec<Value> = db
                .collection(&collection)?
                .get_all()?
                .into_iter()
                .map(|doc| doc.unwrap_or(Value::Null))
                .collect();
            print_json(&Value::Array(docs))?;
        }
        Commands::Drop { collection } => {
            db.drop_collection(&collection)?;
        }
    }

    Ok(())
}

fn parse_json(text: &str) -> filedb::Result<Value> {
    serde_json::from_str(text).map_err(FileDbError::from)
}

fn print_json(value: &Value) -> filedb::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
