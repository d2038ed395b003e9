//! Behavior registration and event dispatch.

use crate::{
    behaviors::{AnchorScroller, CardAnimator, SectionObserver, ThemeManager},
    config::EnhancerConfig,
    event::{Effect, PageEvent, PageSnapshot},
};

/// A page behavior: a pure mapping from an event and a state snapshot to the
/// effects it wants applied.
///
/// Behaviors ignore events that are not theirs by returning an empty list.
pub trait Behavior {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decides the effects for `event`. Must not touch the page directly.
    fn handle(&self, event: &PageEvent, snapshot: &PageSnapshot) -> Vec<Effect>;
}

/// Routes every event to all registered behaviors.
#[derive(Default)]
pub struct Dispatcher {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Dispatcher {
    /// An empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four stock behaviors, configured from `config`.
    pub fn with_defaults(config: &EnhancerConfig) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(ThemeManager);
        dispatcher.register(AnchorScroller);
        dispatcher.register(SectionObserver);
        dispatcher.register(CardAnimator::from_config(config));
        tracing::debug!(behaviors = ?dispatcher.behavior_names(), "page behaviors registered");
        dispatcher
    }

    /// Appends a behavior. Effects are emitted in registration order.
    pub fn register(&mut self, behavior: impl Behavior + 'static) -> &mut Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Names of the registered behaviors, in order.
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    /// Collects the effects every behavior requests for `event`.
    pub fn dispatch(&self, event: &PageEvent, snapshot: &PageSnapshot) -> Vec<Effect> {
        let mut effects = Vec::new();
        for behavior in &self.behaviors {
            let produced = behavior.handle(event, snapshot);
            if !produced.is_empty() {
                tracing::debug!(
                    behavior = behavior.name(),
                    count = produced.len(),
                    "behavior produced effects"
                );
            }
            effects.extend(produced);
        }
        effects
    }
}
