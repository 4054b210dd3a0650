use async_trait::async_trait;
use captive_dns_application::ports::{InterfaceAddress, InterfaceAddressReader};
use captive_dns_domain::DomainError;
use std::ffi::CStr;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Lists interface addresses with `getifaddrs(3)`.
#[derive(Debug, Default)]
pub struct GetifaddrsInterfaceReader;

impl GetifaddrsInterfaceReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterfaceAddressReader for GetifaddrsInterfaceReader {
    async fn read_interface_addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError> {
        let addresses = read_getifaddrs()?;
        debug!(count = addresses.len(), "Interface addresses listed");
        Ok(addresses)
    }
}

fn read_getifaddrs() -> Result<Vec<InterfaceAddress>, DomainError> {
    let mut head: *mut libc::ifaddrs = std::ptr::null_mut();
    if unsafe { libc::getifaddrs(&mut head) } != 0 {
        return Err(DomainError::InterfaceDiscovery(
            io::Error::last_os_error().to_string(),
        ));
    }

    let mut addresses = Vec::new();
    let mut cursor = head;

    while !cursor.is_null() {
        let ifa = unsafe { &*cursor };
        cursor = ifa.ifa_next;

        if ifa.ifa_addr.is_null() || ifa.ifa_name.is_null() {
            continue;
        }
        let Some(ip) = (unsafe { sockaddr_to_ip(ifa.ifa_addr) }) else {
            continue;
        };

        let name = unsafe { CStr::from_ptr(ifa.ifa_name) }
            .to_string_lossy()
            .into_owned();
        let loopback = ifa.ifa_flags & (libc::IFF_LOOPBACK as libc::c_uint) != 0;

        addresses.push(InterfaceAddress::new(name, ip, loopback));
    }

    unsafe { libc::freeifaddrs(head) };
    Ok(addresses)
}

/// # Safety
/// `addr` must point to a valid socket address whose size matches its family.
unsafe fn sockaddr_to_ip(addr: *const libc::sockaddr) -> Option<IpAddr> {
    match (*addr).sa_family as libc::c_int {
        libc::AF_INET => {
            let sin = &*(addr as *const libc::sockaddr_in);
            Some(IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))))
        }
        libc::AF_INET6 => {
            let sin6 = &*(addr as *const libc::sockaddr_in6);
            Some(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)))
        }
        _ => None,
    }
}
