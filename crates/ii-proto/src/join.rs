//! Channel join notifications.
//!
//! ii reports a join in the channel's `out` file as
//! `nick(~user@host) has joined #channel`. The auto-op tooling receives that
//! message text and needs the three components back.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

const JOINED: &str = " has joined ";

/// A parsed `<nick>(<hostmask>) has joined <channel>` notification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JoinEvent {
    /// Nickname of the joining user.
    pub nick: String,
    /// `user@host` part of the joining user.
    pub hostmask: String,
    /// Channel that was joined.
    pub channel: String,
}

impl JoinEvent {
    /// Parse a join notification.
    ///
    /// The separator `" has joined "` and the opening parenthesis must each
    /// occur exactly once. Surrounding whitespace of every component is
    /// discarded and a single trailing `)` is stripped from the hostmask.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut halves = line.split(JOINED);
        let (source, channel) = match (halves.next(), halves.next(), halves.next()) {
            (Some(source), Some(channel), None) => (source, channel),
            _ => {
                return Err(ParseError::NotAJoin {
                    line: line.to_string(),
                })
            }
        };

        let mut parts = source.split('(');
        let (nick, hostmask) = match (parts.next(), parts.next(), parts.next()) {
            (Some(nick), Some(hostmask), None) => (nick, hostmask),
            _ => {
                return Err(ParseError::MalformedSource {
                    line: line.to_string(),
                })
            }
        };
        let hostmask = hostmask.strip_suffix(')').unwrap_or(hostmask);

        Ok(Self {
            nick: nick.trim().to_string(),
            hostmask: hostmask.trim().to_string(),
            channel: channel.trim().to_string(),
        })
    }

    /// The `nick!user@host` string that hostmask patterns are matched against.
    pub fn identity(&self) -> String {
        format!("{}!{}", self.nick, self.hostmask)
    }
}

impl FromStr for JoinEvent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JoinEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}){}{}", self.nick, self.hostmask, JOINED, self.channel)
    }
}
