//! Delivery of mode directives into ii's `in` FIFO.
//!
//! ii reads commands from a named pipe. Opening a pipe for writing blocks
//! until a reader attaches and writing blocks while the pipe is full, so both
//! steps run under their own deadline:
//!
//! 1. open: poll a non-blocking open until ii is reading, bounded by the open
//!    deadline; expiry aborts the whole dispatch
//! 2. write: each line gets the (shorter) write deadline; expiry skips that
//!    line only
//!
//! The deadlines are plain values scoped to one await each, so they never
//! overlap and nothing is left armed afterwards.

use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ii_proto::ModeDirective;
use nix::errno::Errno;
use tokio::io::AsyncWriteExt;
use tokio::net::unix::pipe;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::config::DispatchConfig;
use crate::error::DispatchError;

/// How often to retry opening the FIFO while no reader is attached.
const OPEN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What happened to the directives of one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub written: usize,
    pub skipped: usize,
}

/// Writes directives to a FIFO with bounded blocking.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    open_timeout: Duration,
    write_timeout: Duration,
    pacing: Duration,
}

impl Dispatcher {
    /// Create a dispatcher from the `[dispatch]` configuration section.
    pub fn new(config: &DispatchConfig) -> Self {
        Self::with_timeouts(config.open_timeout(), config.write_timeout(), config.pacing())
    }

    /// Create a dispatcher with explicit deadlines and pacing.
    pub fn with_timeouts(
        open_timeout: Duration,
        write_timeout: Duration,
        pacing: Duration,
    ) -> Self {
        Self {
            open_timeout,
            write_timeout,
            pacing,
        }
    }

    /// Write every directive to the FIFO at `path`, one line each.
    ///
    /// Fails without writing anything when the FIFO cannot be opened in time
    /// or `path` is not a FIFO. Lines that cannot be written are logged and
    /// counted as skipped.
    pub async fn dispatch<'a, I>(
        &self,
        path: &Path,
        directives: I,
    ) -> Result<DispatchReport, DispatchError>
    where
        I: IntoIterator<Item = &'a ModeDirective>,
    {
        let mut directives = directives.into_iter().peekable();
        let mut report = DispatchReport::default();
        if directives.peek().is_none() {
            return Ok(report);
        }

        let mut sender = self.open(path).await?;

        while let Some(directive) = directives.next() {
            let line = directive.to_string();
            match self.write_line(&mut sender, path, &line).await {
                Ok(()) => {
                    report.written += 1;
                    if directives.peek().is_some() && !self.pacing.is_zero() {
                        sleep(self.pacing).await;
                    }
                }
                Err(e) => {
                    warn!(code = e.error_code(), error = %e, "Failed to write mode");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            path = %path.display(),
            written = report.written,
            skipped = report.skipped,
            "Dispatch finished"
        );
        Ok(report)
    }

    /// Open `path` for writing once a reader is attached.
    async fn open(&self, path: &Path) -> Result<pipe::Sender, DispatchError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|source| DispatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.file_type().is_fifo() {
            return Err(not_fifo(path));
        }

        match timeout(self.open_timeout, wait_for_reader(path)).await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::OpenTimeout {
                path: path.to_path_buf(),
                timeout: self.open_timeout,
            }),
        }
    }

    async fn write_line(
        &self,
        sender: &mut pipe::Sender,
        path: &Path,
        line: &str,
    ) -> Result<(), DispatchError> {
        debug!(line = %line.trim_end(), "Will write mode");
        match timeout(self.write_timeout, sender.write_all(line.as_bytes())).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(DispatchError::Io {
                path: path.to_path_buf(),
                source,
            }),
            Err(_) => Err(DispatchError::WriteTimeout {
                line: line.to_string(),
                timeout: self.write_timeout,
            }),
        }
    }
}

/// Retry a non-blocking open until it stops failing with `ENXIO`, which is
/// what opening a FIFO for writing returns while nobody reads it.
async fn wait_for_reader(path: &Path) -> Result<pipe::Sender, DispatchError> {
    loop {
        match pipe::OpenOptions::new().open_sender(path) {
            Ok(sender) => return Ok(sender),
            Err(e) if e.raw_os_error() == Some(Errno::ENXIO as i32) => {
                sleep(OPEN_POLL_INTERVAL).await;
            }
            // tokio re-checks the file type after opening
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => return Err(not_fifo(path)),
            Err(source) => {
                return Err(DispatchError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
}

fn not_fifo(path: &Path) -> DispatchError {
    DispatchError::NotFifo {
        path: PathBuf::from(path),
    }
}
