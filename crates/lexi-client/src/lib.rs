mod client;

pub use client::DictApiClient;

use lexi_types::WordEntry;

/// Word lookup provider interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Look up a word and return its entries.
    ///
    /// `word` is expected to be non-empty after trimming; the caller is
    /// responsible for that check. All failures come back as a
    /// [`LookupError`], never a panic.
    async fn lookup_word(&self, word: &str) -> Result<Vec<WordEntry>, LookupError>;
}

/// Normalized lookup failure.
///
/// Display of either variant is the exact string shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// The service answered with a non-success status; the message is the
    /// error body's explanation, or a fixed fallback when it had none.
    #[error("{0}")]
    Server(String),

    /// Transport failure (DNS, refused connection, timeout) or a response
    /// body we could not decode.
    #[error("An unknown error occurred.")]
    Unknown,
}
