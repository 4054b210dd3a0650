use crate::ports::InterfaceAddressReader;
use captive_dns_domain::RedirectAddress;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectSource {
    /// Set explicitly by flag, environment or config file.
    Override,
    /// First non-loopback IPv4 address, found on this interface.
    Interface(String),
    /// Nothing usable was found.
    LoopbackFallback,
}

impl fmt::Display for RedirectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectSource::Override => write!(f, "override"),
            RedirectSource::Interface(name) => write!(f, "interface {}", name),
            RedirectSource::LoopbackFallback => write!(f, "loopback fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRedirect {
    pub address: RedirectAddress,
    pub source: RedirectSource,
}

/// Decides, once at startup, which address every query is answered with.
pub struct ResolveRedirectAddressUseCase {
    reader: Arc<dyn InterfaceAddressReader>,
}

impl ResolveRedirectAddressUseCase {
    pub fn new(reader: Arc<dyn InterfaceAddressReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self, override_address: Option<RedirectAddress>) -> ResolvedRedirect {
        if let Some(address) = override_address {
            return ResolvedRedirect {
                address,
                source: RedirectSource::Override,
            };
        }

        let interfaces = match self.reader.read_interface_addresses().await {
            Ok(interfaces) => interfaces,
            Err(e) => {
                warn!(error = %e, "Failed to read interface addresses, using loopback");
                return Self::loopback();
            }
        };

        debug!(count = interfaces.len(), "Interface addresses read");

        interfaces
            .into_iter()
            .find_map(|iface| match iface.ip {
                IpAddr::V4(v4) if !iface.loopback && !v4.is_loopback() => Some(ResolvedRedirect {
                    address: RedirectAddress::new(v4),
                    source: RedirectSource::Interface(iface.name),
                }),
                _ => None,
            })
            .unwrap_or_else(Self::loopback)
    }

    fn loopback() -> ResolvedRedirect {
        ResolvedRedirect {
            address: RedirectAddress::LOOPBACK,
            source: RedirectSource::LoopbackFallback,
        }
    }
}
