use lexi_types::WordEntry;

/// Lookup lifecycle phase. Exactly one value at any time; there is no
/// terminal phase, every phase can re-enter `Pending` on a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// The current lookup's state, as observed by subscribers.
///
/// `error` is set only while `phase == Failed`, and a failed lookup always
/// clears `entries`. Prior entries stay visible while a new lookup is
/// pending, until its result overwrites them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupState {
    pub entries: Vec<WordEntry>,
    pub phase: Phase,
    pub error: Option<String>,
}
