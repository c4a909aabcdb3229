use std::sync::Arc;

use tokio::sync::watch;

use lexi_client::DictionaryProvider;

use crate::state::{LookupState, Phase};

/// Owner and sole mutator of [`LookupState`].
///
/// Construct one per application (or per test) with the provider injected;
/// there is no global instance. Readers take [`snapshot`](Self::snapshot)
/// or watch changes via [`subscribe`](Self::subscribe).
pub struct LookupStore {
    provider: Arc<dyn DictionaryProvider>,
    state: watch::Sender<LookupState>,
}

impl LookupStore {
    pub fn new(provider: Arc<dyn DictionaryProvider>) -> Self {
        let (state, _) = watch::channel(LookupState::default());
        Self { provider, state }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Request a lookup. Fire-and-forget: the pending transition applies
    /// before this returns, the completion transition lands once the
    /// provider call resolves on the spawned task.
    ///
    /// A word that is empty after trimming changes nothing at all.
    ///
    /// Requests in flight are not cancelled by newer ones; whichever
    /// response resolves last overwrites the state, regardless of issue
    /// order. Must be called from within a tokio runtime.
    pub fn request_lookup(self: &Arc<Self>, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        tracing::debug!("lookup requested: '{}'", word);
        self.state.send_modify(|state| {
            state.phase = Phase::Pending;
            state.error = None;
        });

        let store = Arc::clone(self);
        let word = word.to_owned();
        tokio::spawn(async move {
            let result = store.provider.lookup_word(&word).await;
            store.state.send_modify(|state| match result {
                Ok(entries) => {
                    tracing::debug!("lookup for '{}' returned {} entries", word, entries.len());
                    state.phase = Phase::Succeeded;
                    state.entries = entries;
                }
                Err(err) => {
                    tracing::warn!("lookup for '{}' failed: {}", word, err);
                    state.phase = Phase::Failed;
                    state.entries = Vec::new();
                    state.error = Some(err.to_string());
                }
            });
        });
    }
}
