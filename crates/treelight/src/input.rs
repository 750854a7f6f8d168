//! Terminal input polling on a background thread.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

use crate::shutdown::{ShutdownReason, ShutdownSender};

/// Start the input thread. It ends after requesting a shutdown or when
/// reading events fails.
pub fn spawn(sender: ShutdownSender) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            loop {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if is_quit_key(key) {
                            sender.request(ShutdownReason::Key);
                            return;
                        }
                    }
                    // The next draw resizes and repaints the whole screen.
                    Ok(Event::Resize(width, height)) => {
                        debug!("terminal resized to {width}x{height}");
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!("stopped reading terminal events: {err}");
                        return;
                    }
                }
            }
        })
}

/// Whether the key stops the animation.
pub fn is_quit_key(key: KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
    )
}
