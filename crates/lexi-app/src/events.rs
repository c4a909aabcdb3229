use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use lexi_store::LookupStore;
use lexi_types::AppEvent;

/// App's main loop: consumes input events and drives the lookup store.
pub async fn event_loop(
    store: Arc<LookupStore>,
    event_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for input");
    loop {
        let event = event_rx.recv().await?;

        match event {
            AppEvent::SearchText(text) => {
                let word = text.trim();
                // whitespace-only input is silently ignored
                if word.is_empty() {
                    continue;
                }
                tracing::debug!("dispatching lookup for '{}'", word);
                store.request_lookup(word);
            }
            AppEvent::Quit => {
                tracing::info!("input closed, shutting down");
                cancel.cancel();
                break;
            }
        }
    }
    Ok(())
}
