//! Shoe inventory CLI - data file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the data file with only its header row
//! shoes-cli init
//!
//! # List football-suitable shoes
//! shoes-cli list --football
//!
//! # Add a pair of shoes
//! shoes-cli add --id NK-01 --brand Nike --model Mercurial --category Football \
//!     --color Red --size 42 --price 1500000
//!
//! # Print the dashboard aggregations
//! shoes-cli stats
//! ```
//!
//! # Environment Variables
//!
//! - `SHOES_DATA_FILE` - Path of the CSV data file (default: `shoes_data.csv`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shoe_inventory_core::{ShoeDraft, ShoeFilter};
use shoe_inventory_dashboard::config::DEFAULT_DATA_FILE;
use shoe_inventory_dashboard::storage::ShoeRepository;

mod commands;

#[derive(Parser)]
#[command(name = "shoes-cli")]
#[command(author, version, about = "Shoe inventory CLI tools")]
struct Cli {
    /// CSV data file
    #[arg(long, global = true, env = "SHOES_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file with only its header row, if missing
    Init,
    /// Print the shoes in the data file
    List {
        /// Only football-suitable shoes
        #[arg(long)]
        football: bool,

        /// Only running-suitable shoes
        #[arg(long)]
        running: bool,
    },
    /// Validate and append a pair of shoes
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        /// One of Running, Lifestyle, Casual, Skateboarding, Basketball,
        /// Boots, Sandals, Football
        #[arg(long)]
        category: String,

        #[arg(long)]
        color: String,

        /// EU size, 35 to 49
        #[arg(long)]
        size: String,

        /// Price in rupiah
        #[arg(long)]
        price: String,
    },
    /// Print mean price by brand and size, and counts by category
    Stats,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), commands::CliError> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let repository = ShoeRepository::new(cli.data_file);

    match cli.command {
        Commands::Init => commands::inventory::init(&repository).await?,
        Commands::List { football, running } => {
            let filter = ShoeFilter::new(football, running);
            let table = commands::report::list(&repository, filter).await?;
            print!("{table}");
        }
        Commands::Add {
            id,
            brand,
            model,
            category,
            color,
            size,
            price,
        } => {
            let draft = ShoeDraft {
                shoes_id: id,
                brand,
                model,
                category,
                color,
                size_eu: size,
                price_idr: price,
            };
            commands::inventory::add(&repository, &draft).await?;
        }
        Commands::Stats => {
            let report = commands::report::stats(&repository).await?;
            print!("{report}");
        }
    }
    Ok(())
}
