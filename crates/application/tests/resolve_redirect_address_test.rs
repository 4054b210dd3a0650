mod helpers;

use captive_dns_application::use_cases::{RedirectSource, ResolveRedirectAddressUseCase};
use captive_dns_domain::RedirectAddress;
use helpers::MockInterfaceReader;
use std::sync::Arc;

fn make_use_case(reader: &MockInterfaceReader) -> ResolveRedirectAddressUseCase {
    ResolveRedirectAddressUseCase::new(Arc::new(reader.clone()))
}

#[tokio::test]
async fn test_override_wins_without_reading_interfaces() {
    let reader = MockInterfaceReader::new().with_interface("eth0", "192.168.1.50", false);
    let use_case = make_use_case(&reader);

    let resolved = use_case
        .execute(Some("10.10.0.1".parse().unwrap()))
        .await;

    assert_eq!(resolved.address.octets(), [10, 10, 0, 1]);
    assert_eq!(resolved.source, RedirectSource::Override);
    assert_eq!(reader.call_count(), 0);
}

#[tokio::test]
async fn test_first_non_loopback_ipv4_is_used() {
    let reader = MockInterfaceReader::new()
        .with_interface("lo", "127.0.0.1", true)
        .with_interface("eth0", "fe80::1", false)
        .with_interface("eth0", "192.168.1.50", false)
        .with_interface("wlan0", "10.0.0.7", false);
    let use_case = make_use_case(&reader);

    let resolved = use_case.execute(None).await;

    assert_eq!(resolved.address.octets(), [192, 168, 1, 50]);
    assert_eq!(resolved.source, RedirectSource::Interface("eth0".to_string()));
}

#[tokio::test]
async fn test_loopback_address_without_flag_is_skipped() {
    let reader = MockInterfaceReader::new()
        .with_interface("lo2", "127.0.0.2", false)
        .with_interface("eth1", "172.16.0.9", false);
    let use_case = make_use_case(&reader);

    let resolved = use_case.execute(None).await;

    assert_eq!(resolved.address.octets(), [172, 16, 0, 9]);
}

#[tokio::test]
async fn test_only_loopback_falls_back_to_localhost() {
    let reader = MockInterfaceReader::new().with_interface("lo", "127.0.0.1", true);
    let use_case = make_use_case(&reader);

    let resolved = use_case.execute(None).await;

    assert_eq!(resolved.address, RedirectAddress::LOOPBACK);
    assert_eq!(resolved.source, RedirectSource::LoopbackFallback);
}

#[tokio::test]
async fn test_no_interfaces_falls_back_to_localhost() {
    let reader = MockInterfaceReader::new();
    let use_case = make_use_case(&reader);

    let resolved = use_case.execute(None).await;

    assert_eq!(resolved.address, RedirectAddress::LOOPBACK);
}

#[tokio::test]
async fn test_reader_failure_falls_back_to_localhost() {
    let reader = MockInterfaceReader::failing();
    let use_case = make_use_case(&reader);

    let resolved = use_case.execute(None).await;

    assert_eq!(resolved.address, RedirectAddress::LOOPBACK);
    assert_eq!(resolved.source, RedirectSource::LoopbackFallback);
    assert_eq!(reader.call_count(), 1);
}
