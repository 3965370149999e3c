use std::time::Duration;

use tokio::time::sleep;
use tonic::transport::Channel;
use tracing::debug;

use crate::auction::auction_client::AuctionClient;
use crate::auction::{AuctionSummary, BidRequest, Empty};
use crate::console::Console;
use crate::error::ClientError;
use crate::output::Sink;

/// Settle window after a unary call so its output, and any stream event it
/// triggered, tends to land before the next prompt. Best effort only; the
/// interleaving carries no guarantee.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

const MENU: &str = "\n1. List | 2. Bid | 0. Exit\noption: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    List,
    Bid,
    Exit,
    Other,
}

impl Choice {
    pub fn parse(token: &str) -> Choice {
        match token.trim() {
            "1" => Choice::List,
            "2" => Choice::Bid,
            "0" => Choice::Exit,
            _ => Choice::Other,
        }
    }
}

/// Blocking prompt cycle over the two unary calls. Call failures are printed
/// and the loop keeps going; only the exit command leaves it.
pub struct CommandLoop<C> {
    client: AuctionClient<Channel>,
    console: C,
    sink: Sink,
    identity: String,
}

impl<C: Console> CommandLoop<C> {
    pub fn new(
        client: AuctionClient<Channel>,
        console: C,
        sink: Sink,
        identity: impl Into<String>,
    ) -> Self {
        CommandLoop {
            client,
            console,
            sink,
            identity: identity.into(),
        }
    }

    // Console failures propagate out and end the loop; call failures are
    // printed and the cycle continues.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        loop {
            let token = self.console.read_line(MENU).await?;
            match Choice::parse(&token) {
                Choice::List => {
                    if let Err(err) = self.list().await {
                        let _ = self.sink.send(format!("list failed: {}", err));
                    }
                    sleep(SETTLE_DELAY).await;
                }
                Choice::Bid => {
                    let request = self.prompt_bid().await?;
                    if let Err(err) = self.send_bid(request).await {
                        let _ = self.sink.send(format!("bid failed: {}", err));
                    }
                    sleep(SETTLE_DELAY).await;
                }
                Choice::Exit => {
                    debug!("operator quit");
                    return Ok(());
                }
                Choice::Other => {}
            }
        }
    }

    async fn list(&mut self) -> Result<(), ClientError> {
        let response = self.client.list_auctions(Empty {}).await?;
        for line in render_auction_list(&response.into_inner().auctions) {
            let _ = self.sink.send(line);
        }
        Ok(())
    }

    async fn prompt_bid(&mut self) -> Result<BidRequest, ClientError> {
        let auction_id = self.console.read_i32("auction id: ").await?;
        let value = self.console.read_f64("value: ").await?;
        Ok(BidRequest {
            auction_id,
            user_id: self.identity.clone(),
            value,
        })
    }

    async fn send_bid(&mut self, request: BidRequest) -> Result<(), ClientError> {
        let reply = self.client.place_bid(request).await?;
        let _ = self.sink.send(reply.into_inner().msg);
        Ok(())
    }
}

/// Header line plus one `id | description | starting_value | status` row per
/// auction. An empty listing still shows the header.
pub fn render_auction_list(auctions: &[AuctionSummary]) -> Vec<String> {
    let mut lines = vec!["--- auctions ---".to_string()];
    for auction in auctions {
        lines.push(format!(
            "ID: {} | {} | {} | {}",
            auction.id, auction.description, auction.starting_value, auction.status
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_menu_tokens() {
        assert_eq!(Choice::parse("1"), Choice::List);
        assert_eq!(Choice::parse("2"), Choice::Bid);
        assert_eq!(Choice::parse("0"), Choice::Exit);
        assert_eq!(Choice::parse(" 1 "), Choice::List);
        assert_eq!(Choice::parse("3"), Choice::Other);
        assert_eq!(Choice::parse(""), Choice::Other);
        assert_eq!(Choice::parse("list"), Choice::Other);
    }

    #[test]
    fn empty_listing_is_header_only() {
        assert_eq!(render_auction_list(&[]), vec!["--- auctions ---"]);
    }

    #[test]
    fn listing_renders_one_row_per_auction() {
        let auctions = vec![AuctionSummary {
            id: 1,
            description: "Item A".to_string(),
            starting_value: 10.0,
            status: "open".to_string(),
        }];
        assert_eq!(
            render_auction_list(&auctions),
            vec!["--- auctions ---", "ID: 1 | Item A | 10 | open"]
        );
    }
}
