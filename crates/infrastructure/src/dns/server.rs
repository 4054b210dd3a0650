use super::query_parser::parse_query_name;
use super::wire_response::build_redirect_response;
use captive_dns_application::use_cases::HandleCaptiveQueryUseCase;
use captive_dns_domain::{DnsRequest, RedirectAddress};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Turns one inbound datagram into at most one response datagram.
#[derive(Clone)]
pub struct CaptiveDnsHandler {
    use_case: Arc<HandleCaptiveQueryUseCase>,
}

impl CaptiveDnsHandler {
    pub fn new(use_case: Arc<HandleCaptiveQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub fn redirect(&self) -> RedirectAddress {
        self.use_case.redirect()
    }

    /// Returns the response to send back to `from`, or `None` when the
    /// datagram carries no usable name and is dropped.
    pub fn handle_datagram(&self, buf: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        let name = parse_query_name(buf);

        if let Some(stop) = name.stop_reason() {
            debug!(client = %from, name = %name, reason = %stop, "Query name partially parsed");
        }

        let Some(domain) = name.into_name() else {
            trace!(client = %from, len = buf.len(), "Dropping datagram without a query name");
            return None;
        };

        let answer = self.use_case.execute(&DnsRequest::new(domain, from));
        Some(build_redirect_response(buf, answer.address))
    }
}
