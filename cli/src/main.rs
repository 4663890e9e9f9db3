use anyhow::Result;
use clap::Parser;
use core::config::Settings;
use core::QaBot;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "qa")]
#[command(about = "Answer questions from local Markdown documentation", long_about = None)]
struct Cli {
    /// Question to ask the bot
    question: String,
    /// Override the path to the Markdown documentation directory
    #[arg(long)]
    documents: Option<PathBuf>,
    /// Number of documents to retrieve
    #[arg(long)]
    top_k: Option<usize>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    let documents = cli.documents.unwrap_or(settings.documents_path);
    let top_k = cli.top_k.unwrap_or(settings.top_k);
    tracing::debug!(documents = %documents.display(), top_k, "starting qa bot");

    let bot = QaBot::new(&documents, top_k)?;
    let answer = bot.answer(&cli.question);

    println!("{}", answer.response);
    if !answer.contexts.is_empty() {
        println!("\nMost relevant documents:");
        for ctx in &answer.contexts {
            println!("- {} (score={:.3})", ctx.document.title, ctx.score);
        }
    }
    Ok(())
}
