use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// The single IPv4 address every query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedirectAddress(Ipv4Addr);

impl RedirectAddress {
    pub const LOOPBACK: RedirectAddress = RedirectAddress(Ipv4Addr::LOCALHOST);

    pub fn new(addr: Ipv4Addr) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }
}

impl FromStr for RedirectAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Ipv4Addr>()
            .map(Self)
            .map_err(|_| DomainError::InvalidIpAddress(s.to_string()))
    }
}

impl fmt::Display for RedirectAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
