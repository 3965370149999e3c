use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Producers hand display lines to this side of the channel.
pub type Sink = mpsc::UnboundedSender<String>;

/// The stream consumer and the command loop both write to the terminal, so
/// every display line funnels through one channel and a single printer task
/// emits them in arrival order. Ordering between the two producers is
/// whatever the scheduler gives; within one producer it is preserved.
pub fn spawn_printer() -> (Sink, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let handle = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            println!("{}", line);
        }
    });
    (tx, handle)
}
