use crate::{
    dispatch::Behavior,
    event::{Effect, PageEvent, PageSnapshot},
    theme::{initial_theme, Theme},
};

/// Applies the initial theme, flips it on toggle clicks, and follows the
/// system color scheme until the visitor makes an explicit choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeManager;

impl Behavior for ThemeManager {
    fn name(&self) -> &'static str {
        "theme-manager"
    }

    fn handle(&self, event: &PageEvent, snapshot: &PageSnapshot) -> Vec<Effect> {
        match event {
            PageEvent::Loaded => {
                let theme = initial_theme(snapshot.stored_theme, snapshot.prefers_dark);
                vec![Effect::ApplyTheme(theme)]
            },
            PageEvent::ToggleClicked => {
                // An absent or unknown attribute counts as light.
                let next = match snapshot.applied_theme {
                    Some(Theme::Dark) => Theme::Light,
                    _ => Theme::Dark,
                };
                vec![Effect::ApplyTheme(next)]
            },
            PageEvent::ColorSchemeChanged {
                prefers_dark,
            } => {
                if let Some(stored) = snapshot.stored_theme {
                    tracing::debug!(%stored, "explicit preference stored, ignoring system scheme change");
                    return Vec::new();
                }
                vec![Effect::ApplyTheme(Theme::from_prefers_dark(*prefers_dark))]
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(stored: Option<Theme>, applied: Option<Theme>, prefers_dark: Option<bool>) -> PageSnapshot {
        PageSnapshot {
            stored_theme: stored,
            applied_theme: applied,
            prefers_dark,
        }
    }

    #[test]
    fn load_applies_initial_theme() {
        let effects = ThemeManager.handle(&PageEvent::Loaded, &snapshot(None, None, Some(true)));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);

        let effects =
            ThemeManager.handle(&PageEvent::Loaded, &snapshot(Some(Theme::Light), None, Some(true)));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);
    }

    #[test]
    fn toggle_flips_applied_theme() {
        let effects = ThemeManager
            .handle(&PageEvent::ToggleClicked, &snapshot(None, Some(Theme::Dark), None));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);

        let effects = ThemeManager
            .handle(&PageEvent::ToggleClicked, &snapshot(None, Some(Theme::Light), None));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);
    }

    #[test]
    fn toggle_without_attribute_goes_dark() {
        let effects = ThemeManager.handle(&PageEvent::ToggleClicked, &snapshot(None, None, None));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);
    }

    #[test]
    fn system_change_applies_only_without_stored_choice() {
        let event = PageEvent::ColorSchemeChanged {
            prefers_dark: true,
        };
        let effects = ThemeManager.handle(&event, &snapshot(None, Some(Theme::Light), Some(true)));
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);

        let effects = ThemeManager
            .handle(&event, &snapshot(Some(Theme::Light), Some(Theme::Light), Some(true)));
        assert!(effects.is_empty());
    }

    #[test]
    fn ignores_unrelated_events() {
        let event = PageEvent::CardRegistered {
            card: crate::event::ElementKey(0),
        };
        assert!(ThemeManager.handle(&event, &PageSnapshot::default()).is_empty());
    }
}
