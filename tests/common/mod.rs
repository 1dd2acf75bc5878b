//! Integration test common infrastructure.
//!
//! Provides a throwaway ii directory tree with a real `in` FIFO and a
//! reader standing in for ii on the other end of it.

pub mod ii;
pub mod reader;

#[allow(unused_imports)]
pub use ii::TestIi;
#[allow(unused_imports)]
pub use reader::FifoReader;
