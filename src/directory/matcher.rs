//! Hostmask glob matching.
//!
//! Patterns use IRC-style wildcards against the whole `nick!user@host`:
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Everything else matches literally and case-sensitively.

use regex::{Regex, RegexBuilder};
use tracing::{debug, error};

use super::record::Friend;
use crate::error::PatternError;

/// Upper bound on the compiled size of a single hostmask pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compile a hostmask glob into an anchored regex.
pub fn compile_hostmask(pattern: &str) -> Result<Regex, PatternError> {
    let mut regex_pattern = String::with_capacity(pattern.len() + 2);
    regex_pattern.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            _ => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    regex_pattern.push('$');

    RegexBuilder::new(&regex_pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })
}

/// Whether any of the friend's hostmask patterns matches `nick!hostmask`.
///
/// A pattern that does not compile is logged and skipped.
pub fn matches(friend: &Friend, nick: &str, hostmask: &str) -> bool {
    if friend.hosts.is_empty() {
        return false;
    }

    let ident = format!("{nick}!{hostmask}");
    friend.hosts.iter().any(|pattern| {
        debug!(ident = %ident, pattern = %pattern, "Try to match hostmask");
        match compile_hostmask(pattern) {
            Ok(re) => re.is_match(&ident),
            Err(e) => {
                error!(handle = %friend.handle, error = %e, "Skipping hostmask pattern");
                false
            }
        }
    })
}
