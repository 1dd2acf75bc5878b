//! Friend permission flags.
//!
//! Flags are single characters. Only a handful mean anything to the auto-op
//! logic; the rest are carried along for other friends-file consumers.

use std::fmt;

/// Automatic privileges are enabled at all.
pub const AUTO: char = 'a';
/// Grant channel operator.
pub const OP: char = 'o';
/// Grant voice.
pub const VOICE: char = 'v';
/// Never grant channel operator.
pub const DEOP: char = 'd';
/// Never grant voice.
pub const MUTE: char = 'm';

/// Set of single-character flags.
///
/// Membership is per character, independent of order or repetition in the
/// source string. Only ASCII characters are tracked; anything else is
/// dropped on construction since no flag uses it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u128);

impl FlagSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a flag string such as `"aov"`.
    pub fn parse(flags: &str) -> Self {
        flags.chars().fold(Self::empty(), |mut set, c| {
            set.insert(c);
            set
        })
    }

    /// Add a flag. Non-ASCII characters are ignored.
    pub fn insert(&mut self, flag: char) {
        if flag.is_ascii() {
            self.0 |= 1u128 << (flag as u32);
        }
    }

    /// Whether the flag is present.
    #[inline]
    pub fn contains(&self, flag: char) -> bool {
        flag.is_ascii() && self.0 & (1u128 << (flag as u32)) != 0
    }

    /// Whether no flag is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the flags in ASCII order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .map(char::from)
            .filter(move |c| self.contains(*c))
    }
}

impl From<&str> for FlagSet {
    fn from(flags: &str) -> Self {
        Self::parse(flags)
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:?})", self.to_string())
    }
}
