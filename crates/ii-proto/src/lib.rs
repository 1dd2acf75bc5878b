//! # ii-proto
//!
//! Parsing and encoding of the plain-text lines exchanged with the
//! [ii](https://tools.suckless.org/ii/) IRC relay.
//!
//! ii exposes every channel as a directory holding an `out` file (what
//! happened) and an `in` FIFO (what to do). This crate covers the two
//! formats the auto-op tooling needs:
//!
//! - join notifications read from `out`, see [`JoinEvent`]
//! - `/mode` commands written to `in`, see [`ModeDirective`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ii_proto::{JoinEvent, ModeDirective, Privilege};
//!
//! let event: JoinEvent = "alice(~alice@example.com) has joined #rust".parse().unwrap();
//! assert_eq!(event.identity(), "alice!~alice@example.com");
//!
//! let directive = ModeDirective::new(&event.channel, Privilege::Operator, &event.nick);
//! assert_eq!(directive.to_string(), "/mode #rust +o alice\n");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod join;
pub mod mode;

pub use self::error::{ParseError, Result};
pub use self::join::JoinEvent;
pub use self::mode::{ModeDirective, Privilege};
