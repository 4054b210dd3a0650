use async_trait::async_trait;
use captive_dns_domain::DomainError;
use std::net::IpAddr;

/// One address bound to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub ip: IpAddr,
    pub loopback: bool,
}

impl InterfaceAddress {
    pub fn new(name: impl Into<String>, ip: IpAddr, loopback: bool) -> Self {
        Self {
            name: name.into(),
            ip,
            loopback,
        }
    }
}

#[async_trait]
pub trait InterfaceAddressReader: Send + Sync {
    /// Addresses in the order the operating system reports them.
    async fn read_interface_addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError>;
}
