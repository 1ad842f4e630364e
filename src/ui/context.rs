use std::sync::Arc;

use flume::Sender;

use crate::{audio::system::AudioSystem, config::Config, event::events::Event, http::ApiService};

/// Services shared by every view.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub audio_system: AudioSystem,
    pub event_tx: Sender<Event>,
    pub config: Config,
}
