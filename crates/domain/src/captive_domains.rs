use std::sync::Arc;

/// Connectivity-check hostnames looked up by consoles, browsers and phones
/// when they join a network.
pub const BUILTIN_CAPTIVE_DOMAINS: &[&str] = &[
    "ctest.cdn.nintendo.net",
    "conntest.nintendowifi.net",
    "detectportal.firefox.com",
    "connectivitycheck.gstatic.com",
    "connectivitycheck.android.com",
    "clients1.google.com",
    "clients3.google.com",
    "captive.apple.com",
    "ctest.p01.ctest.srv.nintendo.net",
    "www.msftconnecttest.com",
    "api.afk-simulator.com",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryClass {
    /// The name contains this connectivity-check hostname.
    Captive(Arc<str>),
    Other,
}

impl QueryClass {
    pub fn is_captive(&self) -> bool {
        matches!(self, QueryClass::Captive(_))
    }
}

/// Known connectivity-check hostnames. Only used to label log lines;
/// every query gets the same answer regardless of class.
#[derive(Debug, Clone)]
pub struct CaptiveDomainSet {
    domains: Vec<Arc<str>>,
}

impl CaptiveDomainSet {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            domains: Vec::new(),
        };
        set.extend(domains);
        set
    }

    /// Built-in list plus `extra`, skipping blanks and duplicates.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(extra);
        set
    }

    fn extend<I, S>(&mut self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            let domain = domain.as_ref().trim().trim_end_matches('.');
            if domain.is_empty() || self.domains.iter().any(|d| &d[..] == domain) {
                continue;
            }
            self.domains.push(domain.into());
        }
    }

    /// Substring match, so subdomains and prefixed names of a listed
    /// hostname are captive too.
    pub fn classify(&self, name: &str) -> QueryClass {
        self.domains
            .iter()
            .find(|d| name.contains(&d[..]))
            .map(|d| QueryClass::Captive(Arc::clone(d)))
            .unwrap_or(QueryClass::Other)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| &d[..])
    }
}

impl Default for CaptiveDomainSet {
    fn default() -> Self {
        Self::new(BUILTIN_CAPTIVE_DOMAINS.iter().copied())
    }
}
