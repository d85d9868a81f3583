use std::sync::Arc;

use tracing::debug;

use crate::{
    audio::{
        assets::AssetLoader, config::AudioConfig, error::AudioError, playback::PlaybackEngine,
    },
    router::trigger::{Trigger, TriggerChannel, TriggerObserver},
};

/// Plays whatever the trigger channel last asked for. Without an output
/// device it still tracks triggers but stays silent.
pub struct AmbientPlayer {
    engine: Option<PlaybackEngine>,
    observer: TriggerObserver,
    loader: Arc<AssetLoader>,
}

impl AmbientPlayer {
    pub fn new(
        engine: Option<PlaybackEngine>,
        config: &AudioConfig,
        triggers: &TriggerChannel,
    ) -> Self {
        Self {
            engine,
            observer: triggers.observe(),
            loader: Arc::new(AssetLoader::new(config.assets_dir.clone())),
        }
    }

    /// The next emission that has not been started yet.
    pub fn poll(&mut self) -> Option<Arc<Trigger>> {
        self.observer.poll()
    }

    pub fn loader(&self) -> Arc<AssetLoader> {
        self.loader.clone()
    }

    /// Starts `bytes` unless a newer trigger superseded this one while it
    /// was loading. Returns whether anything started.
    pub fn play(&self, trigger: &Trigger, bytes: &[u8]) -> Result<bool, AudioError> {
        if !self.observer.channel().is_latest(trigger) {
            debug!(
                asset = trigger.asset.as_str(),
                generation = trigger.generation,
                "ambient_trigger_superseded"
            );
            return Ok(false);
        }

        let Some(engine) = &self.engine else {
            return Ok(false);
        };

        engine.play_bytes(bytes)?;
        debug!(
            asset = trigger.asset.as_str(),
            generation = trigger.generation,
            "ambient_trigger_started"
        );
        Ok(true)
    }

    pub fn is_playing(&self) -> bool {
        self.engine.as_ref().is_some_and(|engine| !engine.is_empty())
    }

    pub fn stop(&self) {
        if let Some(engine) = &self.engine {
            engine.stop();
        }
    }
}
