pub mod header;
pub mod query_parser;
pub mod server;
pub mod wire_response;

pub use header::DnsHeader;
pub use query_parser::parse_query_name;
pub use server::CaptiveDnsHandler;
pub use wire_response::build_redirect_response;
