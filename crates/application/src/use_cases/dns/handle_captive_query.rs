use captive_dns_domain::{CaptiveDomainSet, DnsRequest, QueryClass, RedirectAddress};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub address: RedirectAddress,
    pub class: QueryClass,
}

/// Answers every name with the redirect address. Classification only
/// changes how the query is logged.
pub struct HandleCaptiveQueryUseCase {
    redirect: RedirectAddress,
    captive_domains: Arc<CaptiveDomainSet>,
}

impl HandleCaptiveQueryUseCase {
    pub fn new(redirect: RedirectAddress, captive_domains: Arc<CaptiveDomainSet>) -> Self {
        Self {
            redirect,
            captive_domains,
        }
    }

    pub fn redirect(&self) -> RedirectAddress {
        self.redirect
    }

    pub fn execute(&self, request: &DnsRequest) -> QueryAnswer {
        let class = self.captive_domains.classify(&request.domain);

        match &class {
            QueryClass::Captive(matched) => {
                info!(
                    domain = %request.domain,
                    matched = %matched,
                    client = %request.client,
                    redirect = %self.redirect,
                    "Captive check query"
                );
            }
            QueryClass::Other => {
                debug!(
                    domain = %request.domain,
                    client = %request.client,
                    redirect = %self.redirect,
                    "DNS query"
                );
            }
        }

        QueryAnswer {
            address: self.redirect,
            class,
        }
    }
}
