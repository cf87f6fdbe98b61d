//! tarotctl - CLI client for the tarot reading daemon

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tarot_shared::{CardCatalog, Category};
use tarotctl::{output, History, HistoryEntry, TarotClient, DEFAULT_SERVER};

// Version is embedded at build time
const VERSION: &str = env!("TAROT_VERSION");

#[derive(Parser)]
#[command(name = "tarotctl")]
#[command(about = "Tarot readings with personalized interpretations", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Daemon base URL
    #[arg(long, global = true, env = "TAROT_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// History file (defaults to the user data directory)
    #[arg(long, global = true, env = "TAROT_HISTORY")]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a card and get an interpretation for a concern
    Draw {
        /// love, career, relationship, finance or etc
        category: String,

        /// What is on your mind (10-500 characters)
        concern: String,
    },

    /// Show a stored reading
    Show { id: String },

    /// List recent readings stored by the daemon
    Recent {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// List catalog cards
    Cards {
        /// wands, cups, swords or pentacles
        #[arg(long)]
        suit: Option<String>,

        /// major or minor
        #[arg(long = "type")]
        arcana: Option<String>,
    },

    /// Check the built-in card catalog for consistency
    ValidateCards,

    /// Show daemon health
    Health,

    /// Show readings drawn from this machine
    History {
        /// Forget all saved readings
        #[arg(long, conflicts_with = "remove")]
        clear: bool,

        /// Forget one saved reading by id
        #[arg(long, value_name = "ID")]
        remove: Option<String>,
    },

    /// List supported categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let history_path = cli.history_file.clone().unwrap_or_else(History::default_path);

    match cli.command {
        Commands::Draw { category, concern } => {
            let client = TarotClient::new(&cli.server)?;
            let reading = client.create_reading(&category, &concern).await?;
            output::print_reading(&reading);

            // The daemon accepted the category, so it parses
            if let Some(category) = Category::parse(&category) {
                let entry = HistoryEntry::from_response(&reading, category);
                if let Err(e) = History::record_to(&history_path, entry) {
                    eprintln!("{} Reading not saved to history: {:#}", "[WARN]".yellow(), e);
                }
            }
            Ok(())
        }
        Commands::Show { id } => {
            let client = TarotClient::new(&cli.server)?;
            let reading = client.get_reading(&id).await?;
            output::print_reading(&reading);
            Ok(())
        }
        Commands::Recent { category, limit } => {
            let client = TarotClient::new(&cli.server)?;
            let listing = client.recent_readings(category.as_deref(), limit).await?;
            output::print_reading_list(&listing.readings);
            Ok(())
        }
        Commands::Cards { suit, arcana } => {
            let client = TarotClient::new(&cli.server)?;
            let cards = client.cards(suit.as_deref(), arcana.as_deref()).await?;
            output::print_cards(&cards);
            Ok(())
        }
        Commands::ValidateCards => {
            let catalog = CardCatalog::standard();
            let issues = catalog.validate();
            output::print_catalog_issues(&issues, catalog.len());
            if !issues.is_empty() {
                bail!("card catalog has {} issue(s)", issues.len());
            }
            Ok(())
        }
        Commands::Health => {
            let client = TarotClient::new(&cli.server)?;
            let health = client.health().await?;
            output::print_health(&health);
            Ok(())
        }
        Commands::History { clear, remove } => {
            let mut history = History::load(&history_path)?;
            if clear {
                history.clear();
                history.save(&history_path)?;
                println!("기록을 모두 삭제했습니다.");
            } else if let Some(id) = remove {
                if !history.remove(&id) {
                    bail!("no saved reading with id {}", id);
                }
                history.save(&history_path)?;
                println!("기록에서 삭제했습니다: {}", id);
            } else {
                output::print_history(history.entries());
            }
            Ok(())
        }
        Commands::Categories => {
            for category in Category::ALL {
                let info = category.info();
                println!("{:<14} {}  {}", category.as_str(), info.label, info.description.dimmed());
            }
            Ok(())
        }
    }
}
