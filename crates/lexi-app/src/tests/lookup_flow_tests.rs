//! Event-loop wiring tests: input events in, store transitions out.

use std::collections::HashMap;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use lexi_client::{DictionaryProvider, LookupError};
use lexi_store::{LookupState, LookupStore, Phase};
use lexi_types::{AppEvent, Definition, Meaning, WordEntry};

use crate::events::event_loop;

struct StaticProvider {
    responses: HashMap<String, Result<Vec<WordEntry>, LookupError>>,
}

#[async_trait::async_trait]
impl DictionaryProvider for StaticProvider {
    async fn lookup_word(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        self.responses
            .get(word)
            .cloned()
            .unwrap_or(Err(LookupError::Unknown))
    }
}

fn hello_entry() -> WordEntry {
    WordEntry {
        word: "hello".to_string(),
        phonetic: String::new(),
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: vec![Definition {
                text: "a greeting".to_string(),
                example: None,
            }],
        }],
    }
}

fn hello_store() -> Arc<LookupStore> {
    let provider = StaticProvider {
        responses: [("hello".to_string(), Ok(vec![hello_entry()]))].into(),
    };
    Arc::new(LookupStore::new(Arc::new(provider)))
}

async fn settled(store: &LookupStore) -> LookupState {
    let mut rx = store.subscribe();
    loop {
        {
            let state = rx.borrow_and_update();
            if matches!(state.phase, Phase::Succeeded | Phase::Failed) {
                return state.clone();
            }
        }
        rx.changed().await.unwrap();
    }
}

#[tokio::test]
async fn search_event_drives_lookup() {
    let store = hello_store();
    let cancel = CancellationToken::new();
    let (tx, rx) = kanal::bounded_async(8);

    let handle = tokio::spawn(event_loop(store.clone(), rx, cancel.clone()));

    tx.send(AppEvent::SearchText("  hello \n".to_string()))
        .await
        .unwrap();

    let state = settled(&store).await;
    assert_eq!(state.phase, Phase::Succeeded);
    assert_eq!(state.entries, vec![hello_entry()]);

    tx.send(AppEvent::Quit).await.unwrap();
    handle.await.unwrap().unwrap();
    assert!(cancel.is_cancelled());
}

#[tokio::test]
async fn whitespace_input_is_ignored() {
    let store = hello_store();
    let cancel = CancellationToken::new();
    let (tx, rx) = kanal::bounded_async(8);

    let handle = tokio::spawn(event_loop(store.clone(), rx, cancel.clone()));

    tx.send(AppEvent::SearchText(String::new())).await.unwrap();
    tx.send(AppEvent::SearchText("   \t ".to_string()))
        .await
        .unwrap();
    tx.send(AppEvent::Quit).await.unwrap();

    // events are handled in order, so once the loop exits both blank
    // inputs have been seen and discarded
    handle.await.unwrap().unwrap();
    assert_eq!(store.snapshot(), LookupState::default());
}

#[tokio::test]
async fn closed_channel_ends_event_loop() {
    let store = hello_store();
    let cancel = CancellationToken::new();
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    let handle = tokio::spawn(event_loop(store, rx, cancel.clone()));
    drop(tx);

    let result = handle.await.unwrap();
    assert!(result.is_err());
    assert!(!cancel.is_cancelled());
}
