//! One-shot shutdown signal shared by the input and signal threads.

use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::time::Duration;

/// Why the render loop is stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Esc, `q` or Ctrl+C was pressed.
    Key,
    /// The process received an interrupt or terminate signal.
    Signal(i32),
    /// Every publisher has gone away.
    Disconnected,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Key => write!(f, "quit key pressed"),
            ShutdownReason::Signal(signal) => write!(f, "received signal {signal}"),
            ShutdownReason::Disconnected => write!(f, "no shutdown sources left"),
        }
    }
}

/// Publishing half, cloned into each background thread.
#[derive(Debug, Clone)]
pub struct ShutdownSender(SyncSender<ShutdownReason>);

impl ShutdownSender {
    /// Request a shutdown. Never blocks; later requests are dropped.
    pub fn request(&self, reason: ShutdownReason) {
        // Full means a shutdown is already pending; disconnected means the
        // render loop is already gone.
        let _ = self.0.try_send(reason);
    }
}

/// Observing half, owned by the render loop.
#[derive(Debug)]
pub struct ShutdownReceiver(Receiver<ShutdownReason>);

impl ShutdownReceiver {
    /// Wait up to `timeout` for a shutdown request.
    ///
    /// Returns `None` when the timeout elapsed and the loop should render.
    pub fn wait(&self, timeout: Duration) -> Option<ShutdownReason> {
        match self.0.recv_timeout(timeout) {
            Ok(reason) => Some(reason),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(ShutdownReason::Disconnected),
        }
    }
}

pub fn channel() -> (ShutdownSender, ShutdownReceiver) {
    let (tx, rx) = mpsc::sync_channel(1);
    (ShutdownSender(tx), ShutdownReceiver(rx))
}
