mod query_builder;
mod static_interfaces;

pub use query_builder::QueryBuilder;
pub use static_interfaces::StaticInterfaceReader;
