//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and TOML loading
//! - [`defaults`]: serde default values
//! - [`validation`]: sanity checks run before anything is dispatched
//!
//! Every setting has a default, so the configuration file is optional.

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, DispatchConfig, FriendsConfig};
pub use validation::{ValidationError, validate};
