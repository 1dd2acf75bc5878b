//! Privilege resolution for a single friend.
//!
//! A privilege is granted when the applicable flags contain `a` (auto), the
//! privilege's grant flag (`o` or `v`) and not its block flag (`d` or `m`).
//!
//! The applicable flags come from the *first* `chanflags` entry naming the
//! channel, in file order. Later entries for the same channel are dead.
//! Without such an entry the global flags apply.

use ii_proto::Privilege;

use super::flags::{self, FlagSet};
use super::record::Friend;

/// Outcome of resolving one privilege in one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub granted: bool,
    /// Delay from the matching channel override. Not acted upon.
    pub delay: Option<u32>,
}

/// Flag granting `privilege`.
pub fn grant_flag(privilege: Privilege) -> char {
    match privilege {
        Privilege::Operator => flags::OP,
        Privilege::Voice => flags::VOICE,
    }
}

/// Flag vetoing `privilege`.
pub fn block_flag(privilege: Privilege) -> char {
    match privilege {
        Privilege::Operator => flags::DEOP,
        Privilege::Voice => flags::MUTE,
    }
}

/// Whether `flags` grant `privilege`.
pub fn grants(set: FlagSet, privilege: Privilege) -> bool {
    set.contains(flags::AUTO)
        && set.contains(grant_flag(privilege))
        && !set.contains(block_flag(privilege))
}

/// Decide whether `friend` gets `privilege` in `channel`.
pub fn resolve(friend: &Friend, channel: &str, privilege: Privilege) -> Resolution {
    match friend.channel_overrides().find(|o| o.channel == channel) {
        Some(entry) => Resolution {
            granted: grants(entry.flags, privilege),
            delay: entry.delay,
        },
        None => Resolution {
            granted: grants(friend.global_flags, privilege),
            delay: None,
        },
    }
}
