//! Core of the `check-gip` plugin.
//!
//! A check resolves a hostname through a [`resolver::HostResolver`], reads
//! the address of a local interface through a [`system::InterfaceRepository`]
//! and compares the two in [`check::run_check`].

pub mod check;
pub mod error;
pub mod resolver;
pub mod system;

pub use check::{CHECK_NAME, run_check};
pub use error::CheckError;
pub use resolver::{HostResolver, SystemResolver};
pub use system::{InterfaceRepository, SystemInterfaces};
