mod interface_reader;

pub use interface_reader::{InterfaceAddress, InterfaceAddressReader};
