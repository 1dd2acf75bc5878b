//! Event handlers.
//!
//! Each handler takes one notification from ii, decides what to do and
//! reports an [`Outcome`](join::Outcome) instead of failing: every error is
//! logged where it is handled.

mod join;

pub use join::{JoinContext, Outcome, destination, handle_join};
