use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::Sender;

use lexi_types::AppEvent;

/// Forward stdin lines to the event loop as `SearchText` events, raw and
/// untrimmed; `Quit` follows once the input stream closes.
///
/// Runs blocking reads on a dedicated thread so a read still pending at
/// shutdown cannot hold the runtime open; the thread dies with the process.
pub fn spawn_input_thread(event_tx: Sender<AppEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::SearchText(line)).is_err() {
                        // event loop is gone
                        return;
                    }
                }
                Err(e) => {
                    tracing::error!("stdin read failed: {e}");
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    })
}
