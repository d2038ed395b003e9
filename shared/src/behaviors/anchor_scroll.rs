use crate::{
    dispatch::Behavior,
    event::{Effect, PageEvent, PageSnapshot},
};

/// Replaces fragment-link navigation with a smooth scroll to the target.
///
/// The default jump is always cancelled, even when the fragment matches
/// nothing on the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorScroller;

impl Behavior for AnchorScroller {
    fn name(&self) -> &'static str {
        "anchor-scroller"
    }

    fn handle(&self, event: &PageEvent, _snapshot: &PageSnapshot) -> Vec<Effect> {
        let PageEvent::AnchorClicked {
            href,
            target,
        } = event
        else {
            return Vec::new();
        };

        match target {
            Some(target) => vec![Effect::PreventDefault, Effect::ScrollIntoView(*target)],
            None => {
                tracing::debug!(%href, "anchor target not found");
                vec![Effect::PreventDefault]
            },
        }
    }
}
