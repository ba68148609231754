// Signal handling module
//
// - SIGINT  (Ctrl+C): shutdown
// - SIGTERM:          shutdown

use std::sync::Arc;
use tokio::sync::Notify;

/// Start signal handlers (Unix)
///
/// Handlers are registered before returning so a registration failure is
/// reported to the caller; the first signal notifies `shutdown` once.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => crate::logger::log_signal("SIGINT (Ctrl+C)"),
            _ = sigterm.recv() => crate::logger::log_signal("SIGTERM"),
        }
        // notify_one stores a permit if the loop is not waiting yet
        shutdown.notify_one();
    });

    Ok(())
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_signal("Ctrl+C");
            shutdown.notify_one();
        }
    });

    Ok(())
}
