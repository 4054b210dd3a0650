use std::net::SocketAddr;
use std::sync::Arc;

/// A parsed, non-empty query name together with the endpoint that sent it.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub client: SocketAddr,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, client: SocketAddr) -> Self {
        Self {
            domain: domain.into(),
            client,
        }
    }
}
