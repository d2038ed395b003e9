//! The four page behaviors. Each one is independent of the others.

mod anchor_scroll;
mod card_fade;
mod section_observer;
mod theme_manager;

pub use anchor_scroll::AnchorScroller;
pub use card_fade::CardAnimator;
pub use section_observer::SectionObserver;
pub use theme_manager::ThemeManager;
