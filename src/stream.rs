use futures::StreamExt;
use tokio::task::JoinHandle;
use tonic::transport::Channel;
use tracing::{info, warn};

use crate::auction::auction_client::AuctionClient;
use crate::auction::WatchRequest;
use crate::event::render_event;
use crate::output::Sink;

/// Opens the server-side event feed and renders it onto the shared sink
/// until the server closes it or it fails. Fire-and-forget: the caller gets
/// the handle back immediately and nothing here can take the process down.
///
/// The client handle is consumed, so one handle opens one stream; watching
/// twice takes an explicit clone. There is no reconnect on close or error.
pub fn spawn_event_stream(
    mut client: AuctionClient<Channel>,
    client_id: String,
    sink: Sink,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("opening event stream as {}", client_id);
        let mut stream = match client.watch(WatchRequest { client_id }).await {
            Ok(response) => response.into_inner(),
            Err(status) => {
                let _ = sink.send(format!("stream error: {}", status.message()));
                return;
            }
        };
        while let Some(item) = stream.next().await {
            match item {
                Ok(event) => {
                    if let Some(line) = render_event(&event) {
                        let _ = sink.send(line);
                    }
                }
                Err(status) => {
                    warn!("event stream failed: {}", status);
                    let _ = sink.send(format!("stream error: {}", status.message()));
                    return;
                }
            }
        }
        info!("event stream ended");
        let _ = sink.send("stream closed by server".to_string());
    })
}
