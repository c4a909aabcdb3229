/// Events passed between the input, lookup and rendering tasks.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text from the input source, untrimmed.
    SearchText(String),
    /// Input source closed, shut the application down.
    Quit,
}
