//! The friends directory: who may be auto-opped or auto-voiced, and where.
//!
//! - [`loader`]: friends file parsing ([`Directory`])
//! - [`record`]: a single friend and its channel overrides
//! - [`flags`]: flag characters and [`FlagSet`]
//! - [`matcher`]: hostmask glob matching
//! - [`resolver`]: flag evaluation per channel and privilege

pub mod flags;
pub mod loader;
pub mod matcher;
pub mod record;
pub mod resolver;

pub use flags::FlagSet;
pub use loader::Directory;
pub use matcher::matches;
pub use record::{ChannelOverride, Friend};
pub use resolver::{Resolution, resolve};
