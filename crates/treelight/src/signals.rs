//! Process termination signals mapped onto the shutdown channel.

use log::warn;

use crate::shutdown::{ShutdownReason, ShutdownSender};

/// Listen for SIGINT and SIGTERM on a background thread.
#[cfg(unix)]
pub fn spawn(sender: ShutdownSender) {
    use signal_hook::{
        consts::{SIGINT, SIGTERM},
        iterator::Signals,
    };

    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(signals) => signals,
        Err(err) => {
            warn!("failed to register signal handlers: {err}");
            return;
        }
    };

    let spawned = std::thread::Builder::new()
        .name("signals".into())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                sender.request(ShutdownReason::Signal(signal));
            }
        });
    if let Err(err) = spawned {
        warn!("failed to start signal thread: {err}");
    }
}

/// Listen for Ctrl+C and console close events.
#[cfg(windows)]
pub fn spawn(sender: ShutdownSender) {
    // Console control events carry no number; report them as SIGINT.
    const SIGINT: i32 = 2;

    if let Err(err) = ctrlc::set_handler(move || {
        sender.request(ShutdownReason::Signal(SIGINT));
    }) {
        warn!("failed to install console handler: {err}");
    }
}
