// Listener module
// Creates the TCP listener with SO_REUSEADDR so a restarted dev server can
// rebind immediately

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEPORT` is not set, so a second server on the same port fails to
/// bind instead of sharing it.
///
/// Must be called from within a tokio runtime.
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allows binding to a port in TIME_WAIT state
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
