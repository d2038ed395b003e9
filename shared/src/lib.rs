//! Target-independent core of the page enhancer.
//!
//! Behaviors are pure: they take a [`PageEvent`] and a [`PageSnapshot`] and
//! return the [`Effect`]s they want. The wasm frontend adapts browser events
//! into `PageEvent`s and implements [`PageHost`] over the DOM.

pub mod behaviors;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod host;
pub mod theme;

pub use config::{ConfigError, EnhancerConfig};
pub use dispatch::{Behavior, Dispatcher};
pub use event::{Effect, ElementKey, PageEvent, PageSnapshot, StyleDeclaration};
pub use host::{apply_effect, run, Applied, HostError, PageHost};
pub use theme::{initial_theme, ParseThemeError, Theme};
