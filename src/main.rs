use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use auction_cli::auction::auction_client::AuctionClient;
use auction_cli::command::CommandLoop;
use auction_cli::console::StdinConsole;
use auction_cli::error::ClientError;
use auction_cli::output;
use auction_cli::stream::spawn_event_stream;

/// Terminal client for the auction gateway
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gateway URL
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Identity sent with the stream subscription and every bid
    #[arg(long, default_value = "rust-client")]
    client_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    info!("connecting to {}", args.url);
    let client = AuctionClient::connect(args.url)
        .await
        .map_err(ClientError::Connect)?;

    let (sink, _printer) = output::spawn_printer();
    spawn_event_stream(client.clone(), args.client_id.clone(), sink.clone());

    let mut commands = CommandLoop::new(client, StdinConsole, sink, args.client_id);
    commands.run().await?;

    // Exit 0 on quit; the stream and printer tasks go down with the runtime.
    Ok(())
}
