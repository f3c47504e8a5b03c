#![allow(dead_code)]

use std::sync::Arc;

use moderator::domain::{GameId, Position};
use moderator::protocol::gateway::RecordingGateway;
use moderator::{
    AppError, GameFlowService, GameRepository, HostSettings, Intent, IntentEnvelope,
    PresentationGateway, RoleCatalog,
};

pub const HOST: i64 = 1;

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    moderator_test_support::logging::init();
}

/// A flow service over a fresh repository, with one lobby already open.
pub struct Table {
    pub flow: GameFlowService,
    pub gateway: Arc<RecordingGateway>,
    pub game_id: GameId,
}

impl Table {
    /// Seat one player per entry of `roles`; `"-"` leaves the seat without a role.
    pub async fn with_roles(roles: &[&str], settings: HostSettings) -> Result<Self, AppError> {
        let gateway = Arc::new(RecordingGateway::new());
        let flow = GameFlowService::new(Arc::new(GameRepository::new()), gateway.clone());
        Self::seat(flow, gateway, roles, settings).await
    }

    /// Same as `with_roles` but rendering through `gateway`.
    pub async fn with_gateway(
        roles: &[&str],
        gateway: Arc<dyn PresentationGateway>,
    ) -> Result<(GameFlowService, GameId), AppError> {
        let flow = GameFlowService::new(Arc::new(GameRepository::new()), gateway);
        let game_id = open_lobby(&flow, roles, HostSettings::default()).await?;
        Ok((flow, game_id))
    }

    async fn seat(
        flow: GameFlowService,
        gateway: Arc<RecordingGateway>,
        roles: &[&str],
        settings: HostSettings,
    ) -> Result<Self, AppError> {
        let game_id = open_lobby(&flow, roles, settings).await?;
        Ok(Self {
            flow,
            gateway,
            game_id,
        })
    }

    pub fn envelope(&self, actor: i64, intent: Intent) -> IntentEnvelope {
        IntentEnvelope {
            game_id: self.game_id,
            actor,
            intent,
        }
    }

    pub fn host(&self, intent: Intent) -> IntentEnvelope {
        self.envelope(HOST, intent)
    }

    pub fn wake_type(&self) -> Option<String> {
        self.flow
            .current_wake(self.game_id)
            .ok()
            .flatten()
            .map(|w| w.wake_type)
    }
}

async fn open_lobby(
    flow: &GameFlowService,
    roles: &[&str],
    settings: HostSettings,
) -> Result<GameId, AppError> {
    let game_id = flow.create_game(HOST, Arc::new(RoleCatalog::classic()), settings);
    for (idx, role) in roles.iter().enumerate() {
        let position: Position = flow.seat_player(game_id, format!("p{}", idx + 1)).await?.value;
        if *role != "-" {
            flow.assign_role(game_id, position, role).await?;
        }
    }
    Ok(game_id)
}
