//! feedback - send one feedback note through the email relay.

use anyhow::{anyhow, Result};
use clap::Parser;

use heritage_classifier::{ClassifierConfig, FeedbackClient};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Feedback message.
    message: String,
    /// Reply address; omitted means anonymous.
    #[arg(long)]
    email: Option<String>,
    /// Relay URL (overrides config).
    #[arg(long)]
    relay: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ClassifierConfig::load()?;
    let url = args
        .relay
        .or(config.feedback_url)
        .ok_or_else(|| anyhow!("no feedback relay configured (HERITAGE_FEEDBACK_URL or --relay)"))?;

    let client = FeedbackClient::new(url, config.timeout);
    client.send(args.email.as_deref(), &args.message)?;
    println!("feedback sent");
    Ok(())
}
