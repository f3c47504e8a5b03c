//! Presentation Gateway contract: how a rendered game leaves the engine.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::error::AppError;
use crate::protocol::town_view::TownView;

#[async_trait]
pub trait PresentationGateway: Send + Sync {
    /// Push the current view to whatever surface the host is using.
    async fn render(&self, view: &TownView) -> Result<(), AppError>;
}

/// Gateway that writes each view to the log; used by the demo binary.
#[derive(Debug, Default)]
pub struct LoggingGateway;

#[async_trait]
impl PresentationGateway for LoggingGateway {
    async fn render(&self, view: &TownView) -> Result<(), AppError> {
        let body = serde_json::to_string(view)?;
        info!(game_id = view.game_id, phase = %view.phase, view = %body, "Rendered town");
        Ok(())
    }
}

/// Gateway that keeps every view it was handed.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    views: Mutex<Vec<TownView>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<TownView> {
        self.views.lock().clone()
    }

    pub fn last(&self) -> Option<TownView> {
        self.views.lock().last().cloned()
    }
}

#[async_trait]
impl PresentationGateway for RecordingGateway {
    async fn render(&self, view: &TownView) -> Result<(), AppError> {
        self.views.lock().push(view.clone());
        Ok(())
    }
}
