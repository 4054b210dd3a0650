//! Captive DNS Domain Layer
pub mod captive_domains;
pub mod config;
pub mod dns_request;
pub mod errors;
pub mod query_name;
pub mod redirect;

pub use captive_domains::{CaptiveDomainSet, QueryClass};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use query_name::{ParseStop, QueryName};
pub use redirect::RedirectAddress;
