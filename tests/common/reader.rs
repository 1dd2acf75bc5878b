//! Reader standing in for ii on the `in` FIFO.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nix::errno::Errno;
use nix::fcntl::OFlag;

/// Reads everything written to a FIFO on a background thread.
pub struct FifoReader {
    path: PathBuf,
    handle: JoinHandle<io::Result<String>>,
}

impl FifoReader {
    /// Start reading. The thread blocks in `open` until a writer shows up
    /// and returns at end of file.
    pub fn spawn(path: &Path) -> Self {
        let path = path.to_path_buf();
        let thread_path = path.clone();
        let handle = thread::spawn(move || std::fs::read_to_string(thread_path));
        Self { path, handle }
    }

    /// Stop reading and return what was received.
    ///
    /// If no writer ever came, a throwaway writer is attached and dropped so
    /// the reader sees end of file.
    pub fn finish(self) -> String {
        while !self.handle.is_finished() {
            match OpenOptions::new()
                .write(true)
                .custom_flags(OFlag::O_NONBLOCK.bits())
                .open(&self.path)
            {
                Ok(writer) => drop(writer),
                Err(e) if e.raw_os_error() == Some(Errno::ENXIO as i32) => {}
                Err(e) => panic!("cannot unblock reader: {e}"),
            }
            thread::sleep(Duration::from_millis(10));
        }
        self.handle
            .join()
            .expect("reader thread panicked")
            .expect("reading FIFO failed")
    }
}
