use captive_dns_infrastructure::dns::wire_response::MAX_UDP_MESSAGE;
use captive_dns_infrastructure::dns::CaptiveDnsHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Pause after a failed receive so a persistent socket error cannot spin.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(50);

pub async fn start_dns_server(
    bind_addr: String,
    handler: CaptiveDnsHandler,
    num_workers: usize,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let sockets = bind_udp_sockets(socket_addr, num_workers).map_err(|e| {
        error!(bind_address = %socket_addr, error = %e, "Failed to bind DNS socket");
        e
    })?;
    let local_addr = sockets[0].local_addr()?;

    info!(num_workers, "DNS Server running on {}", local_addr);
    info!("Redirecting ALL domains to {}", handler.redirect());

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    for (i, socket) in sockets.into_iter().enumerate() {
        let handler = handler.clone();
        join_set.spawn(async move {
            run_udp_worker(socket, handler, i).await;
        });
    }

    while join_set.join_next().await.is_some() {}
    Ok(())
}

/// Binds one socket per worker. Later sockets reuse the port the first one
/// got, so binding port 0 still yields a single shared address.
///
/// SO_REUSEPORT is only set when there is more than one worker, so a single
/// worker owns the port exclusively and a second instance fails to bind.
fn bind_udp_sockets(socket_addr: SocketAddr, num_workers: usize) -> anyhow::Result<Vec<UdpSocket>> {
    let num_workers = num_workers.max(1);
    let reuse_port = num_workers > 1;
    let mut sockets = Vec::with_capacity(num_workers);
    let mut addr = socket_addr;

    for _ in 0..num_workers {
        let socket = create_udp_socket(addr, reuse_port)?;
        addr = socket.local_addr()?;
        sockets.push(socket);
    }

    Ok(sockets)
}

async fn run_udp_worker(socket: UdpSocket, handler: Arc<CaptiveDnsHandler>, worker_id: usize) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                if let Some(pause) = recv_error_backoff(&e) {
                    warn!(worker = worker_id, error = %e, "UDP recv error");
                    tokio::time::sleep(pause).await;
                }
                continue;
            }
        };

        let Some(response) = handler.handle_datagram(&recv_buf[..n], from) else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, from).await {
            warn!(worker = worker_id, client = %from, error = %e, "Failed to send DNS response");
        }
    }
}

/// Interrupted reads retry immediately; anything else waits out the backoff.
fn recv_error_backoff(e: &io::Error) -> Option<Duration> {
    match e.kind() {
        io::ErrorKind::Interrupted => None,
        _ => Some(RECV_ERROR_BACKOFF),
    }
}

fn create_udp_socket(socket_addr: SocketAddr, reuse_port: bool) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    #[cfg(unix)]
    if reuse_port {
        socket.set_reuse_port(true)?;
    }
    #[cfg(not(unix))]
    let _ = reuse_port;
    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
