use serde::{Deserialize, Serialize};

use crate::CaptiveDomainSet;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaptiveConfig {
    /// Extra connectivity-check hostnames, appended to the built-in list.
    #[serde(default)]
    pub extra_domains: Vec<String>,
}

impl CaptiveConfig {
    pub fn domain_set(&self) -> CaptiveDomainSet {
        CaptiveDomainSet::with_extra(&self.extra_domains)
    }
}
