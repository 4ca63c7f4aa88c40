use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    /// Drives the auto-advance timer and flash expiry
    Tick,
}

/// Merges terminal key presses with a fixed tick on one channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    next = input.next() => match next {
                        // Press only: Windows also reports releases
                        Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(_)) => continue,
                        // Input closed: dropping the sender ends the quiz
                        Some(Err(_)) | None => break,
                    },
                    _ = ticks.tick() => Event::Tick,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        EventHandler { rx }
    }

    /// Next event, or None once terminal input has closed
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
