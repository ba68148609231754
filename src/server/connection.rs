// Connection handling module
// Serves a single accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// The connection is driven by hyper's HTTP/1.1 state machine. Clients that
/// stall while sending request headers are dropped after
/// `performance.header_read_timeout` seconds; an idle keep-alive connection
/// is left open. Errors are logged and never reach the accept loop.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    let state = Arc::clone(state);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.performance.keep_alive);

        // Without a timer hyper cannot fire the header timeout, so 0 disables it
        let header_read_timeout = state.config.performance.header_read_timeout;
        if header_read_timeout > 0 {
            builder
                .timer(TokioTimer::new())
                .header_read_timeout(Duration::from_secs(header_read_timeout));
        }

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        match conn.await {
            Ok(()) => {}
            // Header read timeouts close stalled connections and are not reported
            Err(err) if err.is_timeout() => {}
            Err(err) => logger::log_connection_error(&err),
        }
    });
}
