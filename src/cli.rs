use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{config::Config, store};

#[derive(Debug, Parser)]
#[command(name = "stayhub", version, about = "Reservation platform for rentable properties")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge the records of a JSON snapshot file into the store.
    Import {
        /// JSON file with users, listings, bookings and reviews.
        file: PathBuf,
    },
    /// Write the whole store into a JSON snapshot file.
    Export {
        file: PathBuf,
    },
    /// Print collection counts.
    Stats,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    log::info!("Opening snapshot {}", config.db.snapshot.display());
    let db = store::load(&config.db.snapshot)?;

    match args.command {
        Command::Import { file } => {
            let contents = fs::read_to_string(&file)?;
            let snapshot = serde_json::from_str(&contents)?;
            let count = store::restore(&db, snapshot)?;
            store::save(&db, &config.db.snapshot)?;
            println!("Imported {} records from {}", count, file.display());
        }
        Command::Export { file } => {
            let snapshot = store::dump(&db)?;
            fs::write(&file, serde_json::to_string_pretty(&snapshot)?)?;
            println!("Exported the store to {}", file.display());
        }
        Command::Stats => {
            use stayhub_core::repositories::*;
            println!("users:    {}", db.count_users()?);
            println!("listings: {}", db.count_listings()?);
            println!("bookings: {}", db.count_bookings()?);
            println!("reviews:  {}", db.count_reviews()?);
        }
    }
    Ok(())
}
