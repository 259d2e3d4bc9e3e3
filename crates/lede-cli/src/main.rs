use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lede")]
#[command(about = "Lede - article summaries and Q&A from your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an article and summarize it
    Summarize {
        /// URL of the article
        url: String,
        /// Ask for bulleted key points instead of a prose summary
        #[arg(long)]
        key_points: bool,
    },
    /// Ask a question about an article
    Ask {
        /// URL of the article
        url: String,
        /// The question to ask
        question: String,
    },
    /// List saved conversations
    History {
        /// Filter conversations by a free-text query
        #[arg(long)]
        search: Option<String>,
        /// Show aggregate statistics instead of the listing
        #[arg(long)]
        stats: bool,
    },
    /// Show the full transcript of one saved conversation
    Show {
        /// Conversation id (as printed by `lede history`)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { url, key_points } => commands::read::summarize(&url, key_points).await,
        Commands::Ask { url, question } => commands::read::ask(&url, &question).await,
        Commands::History { search, stats } => {
            commands::history::list(search.as_deref(), stats).await
        }
        Commands::Show { id } => commands::history::show(&id).await,
    }
}
