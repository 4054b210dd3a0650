pub mod interface_reader;

pub use interface_reader::GetifaddrsInterfaceReader;
