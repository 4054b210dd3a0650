#![allow(dead_code)]

use async_trait::async_trait;
use captive_dns_application::ports::{InterfaceAddress, InterfaceAddressReader};
use captive_dns_domain::DomainError;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockInterfaceReader {
    addresses: Arc<RwLock<Vec<InterfaceAddress>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockInterfaceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(self, name: &str, ip: &str, loopback: bool) -> Self {
        let ip: IpAddr = ip.parse().unwrap();
        self.addresses
            .write()
            .unwrap()
            .push(InterfaceAddress::new(name, ip, loopback));
        self
    }

    pub fn failing() -> Self {
        let reader = Self::new();
        *reader.should_fail.write().unwrap() = true;
        reader
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl InterfaceAddressReader for MockInterfaceReader {
    async fn read_interface_addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::InterfaceDiscovery(
                "mock getifaddrs failure".to_string(),
            ));
        }
        Ok(self.addresses.read().unwrap().clone())
    }
}
