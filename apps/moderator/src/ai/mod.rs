//! Automated stand-ins for seats without a human behind them.
//!
//! This module provides:
//! - `AutoPlayer` trait and the `WakeView` it decides on
//! - RandomPlayer: random living targets (seedable for tests)
//! - SteadyPlayer: lowest eligible positions, fully predictable
//! - A static registry keyed by profile name

mod random;
pub mod registry;
mod steady;
mod trait_def;

pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use steady::SteadyPlayer;
pub use trait_def::{AiError, AutoPlayer, WakeView};
