//! Boundary between the pure behaviors and the page.
//!
//! A [`PageHost`] exposes the handful of page accessors the behaviors need.
//! [`run`] captures a [`PageSnapshot`] from it, dispatches an event, and
//! applies the resulting effects back through it.

use thiserror::Error;

use crate::{
    dispatch::Dispatcher,
    event::{Effect, ElementKey, PageEvent, PageSnapshot, StyleDeclaration},
    theme::Theme,
};

/// Failure of a single host operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No durable storage on this page (disabled, sandboxed, private mode).
    #[error("storage is unavailable")]
    StorageUnavailable,
    /// Storage refused the write.
    #[error("storage rejected write to `{key}`: {reason}")]
    StorageRejected {
        /// Key being written.
        key: String,
        /// Platform error text.
        reason: String,
    },
    /// The key was never handed out by this host.
    #[error("unknown element {0:?}")]
    UnknownElement(ElementKey),
    /// A DOM call threw.
    #[error("dom call `{call}` failed: {reason}")]
    Dom {
        /// Operation name.
        call: &'static str,
        /// Platform error text.
        reason: String,
    },
}

/// Page accessors used by [`run`].
///
/// Reads return `None` when the underlying API or value is missing; they
/// never fail.
pub trait PageHost {
    /// Raw value in the theme storage slot.
    fn stored_theme(&self) -> Option<String>;

    /// Whether the system prefers a dark scheme; `None` without media-query
    /// support.
    fn prefers_dark(&self) -> Option<bool>;

    /// Raw value of the root theme attribute.
    fn theme_attribute(&self) -> Option<String>;

    /// Writes the root theme attribute.
    fn set_theme_attribute(&mut self, theme: Theme) -> Result<(), HostError>;

    /// Writes the theme storage slot.
    fn persist_theme(&mut self, theme: Theme) -> Result<(), HostError>;

    /// Smoothly scrolls the element so its top aligns with the viewport top.
    fn scroll_into_view(&mut self, target: ElementKey) -> Result<(), HostError>;

    /// Assigns inline style declarations in order.
    fn set_style(
        &mut self,
        target: ElementKey,
        declarations: &[StyleDeclaration],
    ) -> Result<(), HostError>;
}

impl PageSnapshot {
    /// Reads the current state from `host`. Unknown theme strings are
    /// treated as absent.
    pub fn capture<H: PageHost + ?Sized>(host: &H) -> Self {
        Self {
            stored_theme: Theme::parse_lenient(host.stored_theme().as_deref()),
            applied_theme: Theme::parse_lenient(host.theme_attribute().as_deref()),
            prefers_dark: host.prefers_dark(),
        }
    }
}

/// What [`run`] did with one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    /// The caller must cancel the platform event's default action.
    pub prevent_default: bool,
    /// Effects carried out.
    pub applied: usize,
    /// Effects that failed and were skipped.
    pub failed: usize,
}

/// Carries out one effect.
///
/// `ApplyTheme` sets the attribute before persisting, so a storage failure
/// still leaves the page showing the requested theme.
pub fn apply_effect<H: PageHost + ?Sized>(host: &mut H, effect: &Effect) -> Result<(), HostError> {
    match effect {
        Effect::ApplyTheme(theme) => {
            host.set_theme_attribute(*theme)?;
            host.persist_theme(*theme)
        },
        // Cancellation belongs to the live platform event, see `Applied`.
        Effect::PreventDefault => Ok(()),
        Effect::ScrollIntoView(target) => host.scroll_into_view(*target),
        Effect::SetStyle {
            target,
            declarations,
        } => host.set_style(*target, declarations),
    }
}

/// Dispatches `event` against the host's current state and applies every
/// resulting effect. Failures are logged and skipped.
pub fn run<H: PageHost + ?Sized>(dispatcher: &Dispatcher, host: &mut H, event: &PageEvent) -> Applied {
    let snapshot = PageSnapshot::capture(host);
    let effects = dispatcher.dispatch(event, &snapshot);

    let mut outcome = Applied::default();
    for effect in &effects {
        if matches!(effect, Effect::PreventDefault) {
            outcome.prevent_default = true;
        }
        match apply_effect(host, effect) {
            Ok(()) => outcome.applied += 1,
            Err(err) => {
                tracing::warn!(?effect, "skipping effect: {err}");
                outcome.failed += 1;
            },
        }
    }
    outcome
}
