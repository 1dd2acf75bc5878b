//! Fake ii directory tree.
//!
//! Lays out `<root>/<network>/in` as a FIFO plus a friends file, the way ii
//! and its operator would.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iifriends::{Dispatcher, JoinContext};
use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use tempfile::TempDir;

pub const NETWORK: &str = "irc.example.net";
pub const SELF_NICK: &str = "bot";

/// A temporary ii root with one network.
pub struct TestIi {
    root: TempDir,
}

impl TestIi {
    /// Create the tree with a FIFO at `<root>/<network>/in`.
    pub fn new() -> anyhow::Result<Self> {
        let ii = Self::without_fifo()?;
        mkfifo(&ii.fifo_path(), Mode::S_IRUSR | Mode::S_IWUSR)?;
        Ok(ii)
    }

    /// Create the tree but leave `in` absent.
    pub fn without_fifo() -> anyhow::Result<Self> {
        let root = tempfile::tempdir()?;
        std::fs::create_dir_all(root.path().join(NETWORK))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn fifo_path(&self) -> PathBuf {
        self.root().join(NETWORK).join("in")
    }

    pub fn friends_path(&self) -> PathBuf {
        self.root().join("friends.txt")
    }

    /// Replace the friends file contents.
    pub fn write_friends(&self, contents: &str) -> anyhow::Result<()> {
        std::fs::write(self.friends_path(), contents)?;
        Ok(())
    }

    /// Context for handling `message` against this tree.
    pub fn context(&self, message: &str) -> JoinContext {
        JoinContext {
            message: message.to_string(),
            friends_file: self.friends_path(),
            ircd_root: self.root().to_path_buf(),
            network: NETWORK.to_string(),
            self_nick: SELF_NICK.to_string(),
        }
    }
}

/// Dispatcher with short deadlines and no pacing.
pub fn fast_dispatcher() -> Dispatcher {
    Dispatcher::with_timeouts(
        Duration::from_secs(5),
        Duration::from_secs(1),
        Duration::ZERO,
    )
}
