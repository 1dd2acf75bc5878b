//! Friend records.

use std::collections::BTreeMap;

use super::flags::FlagSet;
use crate::error::RecordError;

/// One entry of the friends file, keyed by its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    /// Unique key of the record.
    pub handle: String,
    /// Hostmask globs matched against `nick!user@host`, in file order.
    pub hosts: Vec<String>,
    /// Flags used when no channel override applies.
    pub global_flags: FlagSet,
    /// Raw `chanflags` value, see [`Friend::channel_overrides`].
    pub chanflags: String,
    /// Carried through, never checked.
    pub password: String,
    pub comment: String,
    /// Fields with keys this tool does not know.
    pub extra: BTreeMap<String, String>,
}

impl Friend {
    /// Build a record from the `key=value` fields of one line.
    ///
    /// `line` is only used for the error message.
    pub fn from_fields(
        mut fields: BTreeMap<String, String>,
        line: &str,
    ) -> Result<Self, RecordError> {
        let handle = fields.remove("handle").unwrap_or_default();
        if handle.is_empty() {
            return Err(RecordError::MissingHandle(line.to_string()));
        }

        let hosts = fields
            .remove("hosts")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let global_flags = fields
            .remove("globflags")
            .map(|flags| FlagSet::parse(&flags))
            .unwrap_or_default();

        Ok(Self {
            handle,
            hosts,
            global_flags,
            chanflags: fields.remove("chanflags").unwrap_or_default(),
            password: fields.remove("password").unwrap_or_default(),
            comment: fields.remove("comment").unwrap_or_default(),
            extra: fields,
        })
    }

    /// Per-channel overrides in file order.
    ///
    /// Parsed on every call from the raw `chanflags` value.
    pub fn channel_overrides(&self) -> impl Iterator<Item = ChannelOverride<'_>> {
        self.chanflags.split_whitespace().map(ChannelOverride::parse)
    }
}

/// A `channel,flags,delay` entry of `chanflags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOverride<'a> {
    pub channel: &'a str,
    pub flags: FlagSet,
    /// Seconds to wait before granting. `None` when absent or not a number.
    pub delay: Option<u32>,
}

impl<'a> ChannelOverride<'a> {
    /// Parse one entry. Missing components are empty; this never fails.
    pub fn parse(entry: &'a str) -> Self {
        let mut parts = entry.split(',');
        let channel = parts.next().unwrap_or_default();
        let flags = parts.next().map(FlagSet::parse).unwrap_or_default();
        let delay = parts.next().and_then(|d| d.trim().parse().ok());
        Self {
            channel,
            flags,
            delay,
        }
    }
}
