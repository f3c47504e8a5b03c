#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::host::{HostOption, HostSettings};
pub use domain::game::Game;
pub use domain::roles::RoleCatalog;
pub use error::AppError;
pub use errors::ErrorCode;
pub use protocol::gateway::PresentationGateway;
pub use protocol::intent::{Intent, IntentEnvelope};
pub use protocol::town_view::TownView;
pub use services::game_flow::GameFlowService;
pub use services::games::GameRepository;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
