//! Stream adapters.

mod memory;

pub use memory::MemoryStream;
