// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections until `shutdown` is notified, then close the listener.
///
/// Accept errors are logged and do not stop the loop.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown();
}
