use crate::{
    dispatch::Behavior,
    event::{Effect, PageEvent, PageSnapshot},
};

/// Receives visibility reports for article sections crossing the top fifth
/// of the viewport.
///
/// The hook is wired but inert: it never changes the page. Nav-link
/// highlighting would go here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionObserver;

impl Behavior for SectionObserver {
    fn name(&self) -> &'static str {
        "section-observer"
    }

    fn handle(&self, event: &PageEvent, _snapshot: &PageSnapshot) -> Vec<Effect> {
        if let PageEvent::SectionIntersected {
            section,
            is_intersecting: true,
        } = event
        {
            tracing::trace!(?section, "section entered trigger band");
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ElementKey;

    #[test]
    fn never_produces_effects() {
        for is_intersecting in [true, false] {
            let event = PageEvent::SectionIntersected {
                section: ElementKey(1),
                is_intersecting,
            };
            assert!(SectionObserver.handle(&event, &PageSnapshot::default()).is_empty());
        }
    }
}
