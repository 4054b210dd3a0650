mod mock_interface_reader;

pub use mock_interface_reader::MockInterfaceReader;
