use reqwest::Url;
use serde::Deserialize;

use lexi_types::WordEntry;

use crate::{DictionaryProvider, LookupError};

/// Shown when the service rejects a word without an explanation of its own.
const NO_DEFINITION_FALLBACK: &str = "Could not find definition.";

/// Client for the public dictionary API.
///
/// Performs one `GET {base}/entries/en/{word}` per lookup and normalizes
/// every outcome into `Result<Vec<WordEntry>, LookupError>`. No retries,
/// no timeout beyond the transport default, no cancellation.
#[derive(Clone)]
pub struct DictApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the lookup URL, percent-encoding the word as a path segment.
    ///
    /// Path-segment encoding keeps a `/` inside a word from introducing an
    /// extra segment and round-trips non-ASCII input.
    fn endpoint(&self, word: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["entries", "en", word]);
        Some(url)
    }
}

#[async_trait::async_trait]
impl DictionaryProvider for DictApiClient {
    async fn lookup_word(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let url = match self.endpoint(word) {
            Some(url) => url,
            None => {
                tracing::debug!("unusable base url: {}", self.base_url);
                return Err(LookupError::Unknown);
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("lookup transport failure for '{}': {}", word, e);
                return Err(LookupError::Unknown);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("lookup for '{}' rejected with {}", word, status);
            return Err(LookupError::Server(server_message(&body)));
        }

        match response.json::<Vec<WordEntry>>().await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::debug!("undecodable body for '{}': {}", word, e);
                Err(LookupError::Unknown)
            }
        }
    }
}

/// Extract the human-readable message from an error body.
///
/// The service explains rejections as `{"title": "...", "message": ...}`;
/// a missing, empty, or undecodable `title` falls back to a fixed string.
fn server_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        title: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.title)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_DEFINITION_FALLBACK.to_string())
}
