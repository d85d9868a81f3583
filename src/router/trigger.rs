use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use arc_swap::ArcSwapOption;

use crate::content::model::AssetRef;

/// A single emission. The generation tells a repeat of the same asset apart
/// from the emission that came before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub asset: AssetRef,
    pub generation: u64,
}

/// Last-write-wins slot for ambient effects. Holds only the latest
/// emission; consumers that fall behind skip straight to it.
#[derive(Clone, Default)]
pub struct TriggerChannel {
    latest: Arc<ArcSwapOption<Trigger>>,
    generation: Arc<AtomicU64>,
}

impl TriggerChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, asset: AssetRef) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest
            .store(Some(Arc::new(Trigger { asset, generation })));
        generation
    }

    pub fn latest(&self) -> Option<Arc<Trigger>> {
        self.latest.load_full()
    }

    pub fn is_latest(&self, trigger: &Trigger) -> bool {
        self.latest()
            .is_some_and(|latest| latest.generation == trigger.generation)
    }

    pub fn observe(&self) -> TriggerObserver {
        TriggerObserver {
            channel: self.clone(),
            seen: self.generation.load(Ordering::SeqCst),
        }
    }
}

/// Cursor over a channel that reports each new latest emission once.
#[derive(Clone)]
pub struct TriggerObserver {
    channel: TriggerChannel,
    seen: u64,
}

impl TriggerObserver {
    pub fn poll(&mut self) -> Option<Arc<Trigger>> {
        let latest = self.channel.latest()?;
        if latest.generation <= self.seen {
            return None;
        }
        self.seen = latest.generation;
        Some(latest)
    }

    pub fn channel(&self) -> &TriggerChannel {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_emission_wins() {
        let channel = TriggerChannel::new();
        assert!(channel.latest().is_none());

        channel.emit("a.mp3".into());
        channel.emit("b.mp3".into());

        let latest = channel.latest().unwrap();
        assert_eq!(latest.asset.as_str(), "b.mp3");
        assert_eq!(latest.generation, 2);
    }

    #[test]
    fn observer_sees_each_latest_once() {
        let channel = TriggerChannel::new();
        let mut observer = channel.observe();
        assert!(observer.poll().is_none());

        channel.emit("synare.mp3".into());
        assert_eq!(observer.poll().unwrap().asset.as_str(), "synare.mp3");
        assert!(observer.poll().is_none());
    }

    #[test]
    fn repeating_the_same_asset_is_a_new_emission() {
        let channel = TriggerChannel::new();
        let mut observer = channel.observe();

        channel.emit("synare.mp3".into());
        let first = observer.poll().unwrap();
        channel.emit("synare.mp3".into());
        let second = observer.poll().unwrap();

        assert_eq!(first.asset, second.asset);
        assert!(second.generation > first.generation);
        assert!(!channel.is_latest(&first));
        assert!(channel.is_latest(&second));
    }

    #[test]
    fn slow_observer_skips_to_the_latest() {
        let channel = TriggerChannel::new();
        let mut observer = channel.observe();

        channel.emit("a.mp3".into());
        channel.emit("b.mp3".into());
        channel.emit("c.mp3".into());

        assert_eq!(observer.poll().unwrap().asset.as_str(), "c.mp3");
        assert!(observer.poll().is_none());
    }

    #[test]
    fn observers_start_after_past_emissions() {
        let channel = TriggerChannel::new();
        channel.emit("old.mp3".into());

        let mut observer = channel.observe();
        assert!(observer.poll().is_none());
    }
}
