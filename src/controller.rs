use log::{debug, warn};

use crate::config::ThemeConfig;
use crate::store::PreferenceStore;
use crate::theme::Theme;
use crate::view_state::{DocumentMarkers, ViewState};

pub type BrowserController = ThemePreferenceController<Box<dyn PreferenceStore>, DocumentMarkers>;

/// Keeps the document marker and the persisted preference in step.
///
/// Store and view failures are logged and absorbed: the page always ends
/// up with exactly one theme applied, even if it cannot be persisted.
pub struct ThemePreferenceController<S, V> {
    store: S,
    view: V,
    storage_key: String,
    default_theme: Theme,
}

impl<S: PreferenceStore, V: ViewState> ThemePreferenceController<S, V> {
    pub fn new(store: S, view: V, config: &ThemeConfig) -> Self {
        Self {
            store,
            view,
            storage_key: config.storage_key.clone(),
            default_theme: config.default_theme,
        }
    }

    /// Apply the stored preference (or the default) without writing storage.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored_theme();
        self.apply(theme);
        debug!("Initialized theme to {}", theme);
        theme
    }

    /// Flip the applied theme and persist the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.current().opposite();
        self.apply(next);
        if let Err(e) = self.store.set(&self.storage_key, next.as_str()) {
            warn!("Failed to persist theme {}: {}", next, e);
        }
        debug!("Toggled theme to {}", next);
        next
    }

    /// Theme currently applied to the document.
    pub fn current(&self) -> Theme {
        if self.view.has_marker(Theme::Dark.as_str()) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn stored_theme(&self) -> Theme {
        match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                self.default_theme
            }),
            Ok(None) => self.default_theme,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                self.default_theme
            }
        }
    }

    fn apply(&self, theme: Theme) {
        for stale in Theme::ALL.into_iter().filter(|t| *t != theme) {
            if let Err(e) = self.view.remove_marker(stale.as_str()) {
                warn!("Failed to clear {} marker: {}", stale, e);
            }
        }
        if let Err(e) = self.view.add_marker(theme.as_str()) {
            warn!("Failed to apply {} marker: {}", theme, e);
        }
    }
}
