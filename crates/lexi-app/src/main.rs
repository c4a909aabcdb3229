use std::future::Future;
use std::sync::Arc;

use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use lexi_client::DictApiClient;
use lexi_config::Config;
use lexi_store::LookupStore;
use lexi_types::AppEvent;

mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::new(Config::new()));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(state, shutdown).await;
}

async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) {
    let base_url = {
        let config = state.config.read().await;
        config.api.base_url.clone()
    };

    let store = Arc::new(LookupStore::new(Arc::new(DictApiClient::new(base_url))));
    let cancel = CancellationToken::new();

    let (event_tx, event_rx) = kanal::bounded_async::<AppEvent>(64);

    let _input = io::spawn_input_thread(event_tx.to_sync());

    let renderer = tokio::spawn(ui::render_loop(store.subscribe(), cancel.child_token()));

    let event_loop = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if let Err(e) = events::event_loop(store, event_rx, cancel).await {
                tracing::error!("event loop exited: {e}");
            }
        }
    });

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = event_loop => {
            match result {
                Ok(_) => tracing::info!("event loop finished"),
                Err(e) => tracing::error!("event loop panicked: {e}"),
            }
        }
    }

    cancel.cancel();
    let _ = renderer.await;
}
