//! Configuration for the moderator.

pub mod host;

pub use host::{HostOption, HostSettings};
