use captive_dns_application::use_cases::{
    HandleCaptiveQueryUseCase, ResolveRedirectAddressUseCase, ResolvedRedirect,
};
use captive_dns_domain::Config;
use captive_dns_infrastructure::dns::CaptiveDnsHandler;
use captive_dns_infrastructure::system::GetifaddrsInterfaceReader;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: CaptiveDnsHandler,
    pub redirect: ResolvedRedirect,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let override_address = config.redirect.override_address()?;

        let reader = Arc::new(GetifaddrsInterfaceReader::new());
        let redirect = ResolveRedirectAddressUseCase::new(reader)
            .execute(override_address)
            .await;

        let captive_domains = Arc::new(config.captive.domain_set());
        info!(
            count = captive_domains.len(),
            "Captive portal domains configured"
        );

        let use_case = Arc::new(HandleCaptiveQueryUseCase::new(
            redirect.address,
            captive_domains,
        ));

        Ok(Self {
            handler: CaptiveDnsHandler::new(use_case),
            redirect,
        })
    }
}
