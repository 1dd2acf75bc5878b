//! Join handler: auto-op/voice friends as they enter a channel.

use std::path::{Path, PathBuf};

use ii_proto::JoinEvent;
use tracing::{Instrument, debug, error};

use crate::decision;
use crate::directory::Directory;
use crate::dispatch::{DispatchReport, Dispatcher};
use crate::error::DispatchError;
use crate::telemetry::spans;

/// Everything needed to act on one join notification.
#[derive(Debug, Clone)]
pub struct JoinContext {
    /// Raw notification text, `nick(user@host) has joined #channel`.
    pub message: String,
    /// Friends file to consult.
    pub friends_file: PathBuf,
    /// ii's root directory (`ii -i`).
    pub ircd_root: PathBuf,
    /// Network directory under the root, usually the server name.
    pub network: String,
    /// Our own nick; our own joins are ignored.
    pub self_nick: String,
}

/// How a join notification was handled.
#[derive(Debug)]
pub enum Outcome {
    /// The message was not a join notification.
    Unparsed,
    /// We joined ourselves.
    SelfJoin,
    /// Nobody matched or nothing was granted.
    NoModes,
    /// Modes were handed to ii.
    Dispatched(DispatchReport),
    /// Modes were decided but could not be delivered.
    Failed(DispatchError),
}

/// The FIFO ii reads commands for `network` from.
pub fn destination(ircd_root: &Path, network: &str) -> PathBuf {
    ircd_root.join(network).join("in")
}

/// Handle one join notification end to end.
pub async fn handle_join(ctx: &JoinContext, dispatcher: &Dispatcher) -> Outcome {
    debug!(message = %ctx.message, "Message");
    let event = match JoinEvent::parse(&ctx.message) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "Unable to parse message");
            return Outcome::Unparsed;
        }
    };

    let span = spans::join_event(&event.nick, &event.channel);
    handle_event(ctx, dispatcher, event).instrument(span).await
}

async fn handle_event(ctx: &JoinContext, dispatcher: &Dispatcher, event: JoinEvent) -> Outcome {
    if event.nick == ctx.self_nick {
        debug!("Ignoring our own join");
        return Outcome::SelfJoin;
    }

    debug!(path = %ctx.friends_file.display(), "Friends file");
    let directory = Directory::load_or_empty(&ctx.friends_file);
    let modes = decision::decide(&directory, &event.nick, &event.hostmask, &event.channel);
    if modes.is_empty() {
        debug!("No modes to be set - quit");
        return Outcome::NoModes;
    }

    let output = destination(&ctx.ircd_root, &ctx.network);
    debug!(path = %output.display(), "Output destination");
    match dispatcher.dispatch(&output, &modes).await {
        Ok(report) => Outcome::Dispatched(report),
        Err(e) => {
            error!(code = e.error_code(), error = %e, "Failed to deliver modes");
            Outcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn context(dir: &Path, message: &str) -> JoinContext {
        let friends_file = dir.join("friends.txt");
        std::fs::write(
            &friends_file,
            "handle=alice%hosts=*!*@example.com%globflags=ao\n",
        )
        .unwrap();
        JoinContext {
            message: message.to_string(),
            friends_file,
            ircd_root: dir.to_path_buf(),
            network: "irc.example.net".to_string(),
            self_nick: "bot".to_string(),
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::with_timeouts(
            Duration::from_millis(200),
            Duration::from_millis(100),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_destination() {
        assert_eq!(
            destination(Path::new("/srv/irc"), "libera"),
            PathBuf::from("/srv/irc/libera/in")
        );
    }

    #[tokio::test]
    async fn test_unparsed_message() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), "alice has quit");
        assert!(matches!(handle_join(&ctx, &dispatcher()).await, Outcome::Unparsed));
    }

    #[tokio::test]
    async fn test_self_join_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), "bot(~bot@example.com) has joined #test");
        assert!(matches!(handle_join(&ctx, &dispatcher()).await, Outcome::SelfJoin));
    }

    #[tokio::test]
    async fn test_stranger_gets_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), "mallory(~m@evil.com) has joined #test");
        assert!(matches!(handle_join(&ctx, &dispatcher()).await, Outcome::NoModes));
    }

    #[tokio::test]
    async fn test_missing_friends_file_authorizes_nobody() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path(), "alice(~user@example.com) has joined #test");
        ctx.friends_file = dir.path().join("missing.txt");
        assert!(matches!(handle_join(&ctx, &dispatcher()).await, Outcome::NoModes));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), "alice(~user@example.com) has joined #test");
        // No `<network>/in` exists.
        match handle_join(&ctx, &dispatcher()).await {
            Outcome::Failed(DispatchError::Io { .. }) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
