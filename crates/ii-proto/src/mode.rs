//! Channel privilege modes and the `/mode` commands that grant them.

use std::fmt;

/// A channel privilege that can be handed out automatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    /// Channel operator, `+o`.
    Operator,
    /// Voice, `+v`.
    Voice,
}

impl Privilege {
    /// Both privileges, operator first.
    pub const ALL: [Privilege; 2] = [Privilege::Operator, Privilege::Voice];

    /// The channel mode letter of this privilege.
    pub fn mode_char(self) -> char {
        match self {
            Self::Operator => 'o',
            Self::Voice => 'v',
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator => f.write_str("operator"),
            Self::Voice => f.write_str("voice"),
        }
    }
}

/// Instruction to grant a privilege to a nick in a channel.
///
/// Equality is by value, so a set of directives never holds the same
/// channel/privilege/nick twice. Rendered with [`Display`](fmt::Display) as
/// the exact line ii expects on its `in` FIFO, trailing newline included.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModeDirective {
    /// Target channel.
    pub channel: String,
    /// Privilege being granted.
    pub privilege: Privilege,
    /// Nick receiving the privilege.
    pub nick: String,
}

impl ModeDirective {
    /// Create a directive.
    pub fn new(channel: impl Into<String>, privilege: Privilege, nick: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            privilege,
            nick: nick.into(),
        }
    }
}

impl fmt::Display for ModeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "/mode {} +{} {}",
            self.channel,
            self.privilege.mode_char(),
            self.nick
        )
    }
}
