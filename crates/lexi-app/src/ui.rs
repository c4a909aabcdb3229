use std::fmt::Write;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use lexi_store::{LookupState, Phase};
use lexi_types::WordEntry;

/// Rendering task: prints a view of every state snapshot it observes.
pub async fn render_loop(
    mut state_rx: watch::Receiver<LookupState>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = state_rx.changed() => {
                if changed.is_err() {
                    // store dropped
                    break;
                }
                let snapshot = state_rx.borrow_and_update().clone();
                print!("{}", render(&snapshot));
            }
        }
    }
    Ok(())
}

/// Pure view of one state snapshot; idle renders nothing.
pub(crate) fn render(state: &LookupState) -> String {
    match state.phase {
        Phase::Idle => String::new(),
        Phase::Pending => "Loading...\n".to_string(),
        Phase::Failed => match &state.error {
            Some(error) => format!("Error: {error}\n"),
            None => String::new(),
        },
        Phase::Succeeded => {
            let mut out = String::new();
            for entry in &state.entries {
                render_entry(&mut out, entry);
            }
            out
        }
    }
}

fn render_entry(out: &mut String, entry: &WordEntry) {
    if entry.phonetic.is_empty() {
        let _ = writeln!(out, "{}", entry.word);
    } else {
        let _ = writeln!(out, "{} {}", entry.word, entry.phonetic);
    }
    for meaning in &entry.meanings {
        let _ = writeln!(out, "  [{}]", meaning.part_of_speech);
        for definition in &meaning.definitions {
            let _ = writeln!(out, "    - {}", definition.text);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "      \"{example}\"");
            }
        }
    }
}
