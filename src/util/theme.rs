//! Light/dark theme persistence and application.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system `prefers-color-scheme`, and mirrors the active theme onto the
//! `data-theme` attribute of `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test builds
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gptree_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown strings yield `None`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the header toggle button (shows the theme it switches to).
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Read the theme preference.
///
/// Stored preference wins; otherwise the system preference decides.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(theme) = storage
                .get_item(STORAGE_KEY)
                .ok()
                .flatten()
                .and_then(|val| Theme::from_stored(&val))
            {
                return theme;
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, next.as_str()).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }
    next
}
