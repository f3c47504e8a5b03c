//! Scripted demo night against the logging gateway.
//!
//! `MODERATOR_CATALOG` may point at a JSON role catalogue; otherwise the
//! built-in classic Town is used. Host settings come from `MODERATOR_*`.

use std::sync::Arc;

use moderator::protocol::gateway::LoggingGateway;
use moderator::telemetry;
use moderator::{
    AppError, GameFlowService, GameRepository, HostSettings, Intent, IntentEnvelope, RoleCatalog,
};
use tracing::{error, info};

const HOST_CHAT: i64 = 1;

fn load_catalog() -> Result<RoleCatalog, AppError> {
    match std::env::var("MODERATOR_CATALOG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| AppError::config(format!("cannot read {path}: {e}")))?;
            Ok(RoleCatalog::from_json(&raw)?)
        }
        Err(_) => Ok(RoleCatalog::classic()),
    }
}

async fn run() -> Result<(), AppError> {
    let catalog = Arc::new(load_catalog()?);
    let settings = HostSettings::from_env()?;
    let flow = GameFlowService::new(Arc::new(GameRepository::new()), Arc::new(LoggingGateway));

    let game_id = flow.create_game(HOST_CHAT, catalog, settings);
    flow.seed_automation(game_id, 7)?;

    let table = [
        ("Anna", "mafia"),
        ("Boris", "doctor"),
        ("Vera", "detective"),
        ("Gleb", "citizen"),
        ("Dina", "don"),
        ("Egor", "citizen"),
    ];
    for (idx, (name, role)) in table.iter().enumerate() {
        let position = flow.seat_player(game_id, *name).await?.value;
        flow.assign_role(game_id, position, role).await?;
        if idx % 2 == 0 {
            flow.bind_human(game_id, position, 100 + position as i64).await?;
        } else {
            flow.bind_automated(game_id, position, "SteadyPlayer").await?;
        }
    }

    let host = |intent| IntentEnvelope {
        game_id,
        actor: HOST_CHAT,
        intent,
    };

    flow.dispatch(host(Intent::Advance)).await?;
    while let Some(wake) = flow.current_wake(game_id)? {
        let targets: Vec<u16> = flow
            .view(game_id)?
            .players
            .iter()
            .filter(|p| p.alive && !wake.holders.contains(&p.position))
            .map(|p| p.position)
            .take(wake.choice as usize)
            .collect();
        if targets.len() < wake.choice as usize {
            flow.dispatch(host(Intent::Skip)).await?;
            continue;
        }
        for position in targets {
            flow.dispatch(host(Intent::Toggle { position })).await?;
        }
        // Without host confirmation the last toggle already committed.
        if flow.current_wake(game_id)?.as_ref() == Some(&wake) {
            flow.dispatch(host(Intent::Confirm)).await?;
        }
    }

    let day = flow.dispatch(host(Intent::Advance)).await?;
    info!(game_id, outcome = ?day.value, "Night resolved");

    let archived = flow.terminate(game_id).await?.value;
    info!(game_id, nights = archived.nights, "Demo finished");
    Ok(())
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    if let Err(err) = run().await {
        error!(code = %err.code(), error = %err, "Demo failed");
        std::process::exit(1);
    }
}
