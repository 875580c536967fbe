//! Shared models for the `check-gip` plugin.
//!
//! * [`network`]: addresses bound to local interfaces and the pure selection rule.
//! * [`check`]: the generic checker result (status + message) and its rendering.
//! * [`config`]: the options a single check runs with.

pub mod check;
pub mod config;
pub mod network;
pub mod utils;
