//! iifriends - automatic op/voice for the ii IRC relay.
//!
//! ii writes channel activity to plain files and reads commands from a FIFO.
//! This crate reacts to join notifications: it looks the joining user up in
//! a friends file and, when their hostmask and flags allow it, writes
//! `/mode #channel +o nick` (or `+v`) into ii's `in` FIFO.
//!
//! The pipeline for one notification:
//!
//! ```text
//! join text ──► JoinEvent ──► matcher (per friend) ──► resolver ──► decide ──► Dispatcher ──► <root>/<network>/in
//!                                   ▲
//!                      Directory ───┘ (friends file, loaded once)
//! ```

pub mod config;
pub mod decision;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod telemetry;

pub use config::{Config, DispatchConfig};
pub use decision::decide;
pub use directory::{Directory, FlagSet, Friend};
pub use dispatch::{DispatchReport, Dispatcher};
pub use handlers::{JoinContext, Outcome, handle_join};
