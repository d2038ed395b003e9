use crate::{
    config::EnhancerConfig,
    dispatch::Behavior,
    event::{Effect, ElementKey, PageEvent, PageSnapshot, StyleDeclaration},
};

/// Hides cards when they are registered and fades them in once they become
/// visible. Leaving the viewport does not hide them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAnimator {
    offset_px: u32,
    transition: String,
}

impl Default for CardAnimator {
    fn default() -> Self {
        Self::from_config(&EnhancerConfig::default())
    }
}

impl CardAnimator {
    /// Takes the offset and transition from `config`.
    pub fn from_config(config: &EnhancerConfig) -> Self {
        Self {
            offset_px: config.card_offset_px,
            transition: config.card_transition.clone(),
        }
    }

    /// Declarations for a card that has not been seen yet.
    pub fn hidden_style(&self) -> Vec<StyleDeclaration> {
        vec![
            StyleDeclaration::new("opacity", "0"),
            StyleDeclaration::new("transform", format!("translateY({}px)", self.offset_px)),
            StyleDeclaration::new("transition", self.transition.clone()),
        ]
    }

    /// Declarations for a revealed card.
    pub fn revealed_style(&self) -> Vec<StyleDeclaration> {
        vec![
            StyleDeclaration::new("opacity", "1"),
            StyleDeclaration::new("transform", "translateY(0)"),
        ]
    }

    fn style(&self, target: ElementKey, declarations: Vec<StyleDeclaration>) -> Vec<Effect> {
        vec![Effect::SetStyle {
            target,
            declarations,
        }]
    }
}

impl Behavior for CardAnimator {
    fn name(&self) -> &'static str {
        "card-animator"
    }

    fn handle(&self, event: &PageEvent, _snapshot: &PageSnapshot) -> Vec<Effect> {
        match event {
            PageEvent::CardRegistered {
                card,
            } => self.style(*card, self.hidden_style()),
            PageEvent::CardIntersected {
                card,
                is_intersecting: true,
            } => self.style(*card, self.revealed_style()),
            _ => Vec::new(),
        }
    }
}
