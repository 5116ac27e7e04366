/// I/O adapters and the bounds-checked byte cursor

/// Bounds-checked cursor over an in-memory buffer
pub mod cursor;
/// Reading containers from any `Read` source
pub mod reader;
/// Writing decoded images to any `Write` sink
pub mod writer;

pub use cursor::ByteCursor;
pub use reader::{read_container, read_container_with};
pub use writer::write_linear;
