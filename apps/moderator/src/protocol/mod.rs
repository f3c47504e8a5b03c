//! Presentation protocol: intents in, town views out.

pub mod gateway;
pub mod intent;
pub mod layout;
pub mod town_view;

pub use gateway::{LoggingGateway, PresentationGateway, RecordingGateway};
pub use intent::{Intent, IntentEnvelope};
pub use layout::{interleave_columns, target_rows};
pub use town_view::{MenuButton, PlayerLine, TownView, WakeLine};
