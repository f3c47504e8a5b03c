//! Game flow orchestration service: bridges the pure engine with the
//! repository and the presentation gateway.
//!
//! Every operation locks one game, runs the engine call, derives the
//! lifecycle transitions and renders the resulting view once the lock is
//! released.

mod automation;
mod dispatch;
mod mutation;
mod night_actions;
mod phases;
pub mod seats;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::resolution::{ManualResolution, NightResolver};
use crate::protocol::gateway::PresentationGateway;
use crate::services::games::GameRepository;

pub use dispatch::IntentOutcome;
pub use mutation::GameFlowMutationResult;

pub struct GameFlowService {
    repo: Arc<GameRepository>,
    gateway: Arc<dyn PresentationGateway>,
    resolver: Mutex<Box<dyn NightResolver>>,
}

impl GameFlowService {
    pub fn new(repo: Arc<GameRepository>, gateway: Arc<dyn PresentationGateway>) -> Self {
        Self {
            repo,
            gateway,
            resolver: Mutex::new(Box::new(ManualResolution)),
        }
    }

    /// Replace the resolver consulted at every Night → Day transition.
    pub fn with_resolver(self, resolver: impl NightResolver + 'static) -> Self {
        *self.resolver.lock() = Box::new(resolver);
        self
    }

    pub fn repository(&self) -> &Arc<GameRepository> {
        &self.repo
    }
}
