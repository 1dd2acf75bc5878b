//! Mode decisions for a joining user.
//!
//! Every friend is checked independently and the grants are unioned, so two
//! friends entries that both op the same person yield one directive.

use std::collections::BTreeSet;

use ii_proto::{ModeDirective, Privilege};
use tracing::debug;

use crate::directory::{Directory, matcher, resolver};

/// Handles of all friends whose hostmasks match `nick!hostmask`.
pub fn find_friends<'a>(directory: &'a Directory, nick: &str, hostmask: &str) -> BTreeSet<&'a str> {
    directory
        .friends()
        .filter(|friend| matcher::matches(friend, nick, hostmask))
        .map(|friend| friend.handle.as_str())
        .collect()
}

/// Directives to send for `nick!hostmask` joining `channel`.
pub fn decide(
    directory: &Directory,
    nick: &str,
    hostmask: &str,
    channel: &str,
) -> BTreeSet<ModeDirective> {
    let handles = find_friends(directory, nick, hostmask);
    debug!(nick = %nick, friends = ?handles, "Friends found");

    handles
        .into_iter()
        .filter_map(|handle| directory.get(handle))
        .flat_map(|friend| {
            Privilege::ALL.into_iter().filter_map(move |privilege| {
                let resolution = resolver::resolve(friend, channel, privilege);
                debug!(
                    handle = %friend.handle,
                    %privilege,
                    granted = resolution.granted,
                    delay = ?resolution.delay,
                    "Resolved privilege"
                );
                resolution
                    .granted
                    .then(|| ModeDirective::new(channel, privilege, nick))
            })
        })
        .collect()
}
