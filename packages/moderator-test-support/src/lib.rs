//! Moderator test support utilities
//!
//! Shared by the moderator's integration tests: unified logging
//! initialization and helpers for unique chat identities.

pub mod logging;
pub mod unique_helpers;
