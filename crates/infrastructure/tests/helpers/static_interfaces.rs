#![allow(dead_code)]

use async_trait::async_trait;
use captive_dns_application::ports::{InterfaceAddress, InterfaceAddressReader};
use captive_dns_domain::DomainError;

pub struct StaticInterfaceReader {
    addresses: Vec<InterfaceAddress>,
}

impl StaticInterfaceReader {
    pub fn new(addresses: &[(&str, &str, bool)]) -> Self {
        Self {
            addresses: addresses
                .iter()
                .map(|(name, ip, loopback)| {
                    InterfaceAddress::new(*name, ip.parse().unwrap(), *loopback)
                })
                .collect(),
        }
    }
}

#[async_trait]
impl InterfaceAddressReader for StaticInterfaceReader {
    async fn read_interface_addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError> {
        Ok(self.addresses.clone())
    }
}
