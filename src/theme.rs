//! Theme Preference
//!
//! Light/dark preference: persisted in browser storage, read once at startup,
//! falling back to the system color scheme.

use tracing::warn;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the root `data-theme` attribute; dark is the stylesheet default
    pub fn data_attribute(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "",
        }
    }

    /// Saved preference wins; otherwise follow the system scheme
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved.and_then(Theme::parse).unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

/// Read the saved preference, falling back to the system scheme
pub fn load_theme(storage_key: &str) -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };
    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(storage_key).ok().flatten());
    let prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    Theme::resolve(saved.as_deref(), prefers_dark)
}

pub fn save_theme(storage_key: &str, theme: Theme) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(storage) => {
            if let Err(e) = storage.set_item(storage_key, theme.as_str()) {
                warn!("could not persist theme: {:?}", e);
            }
        }
        None => warn!("local storage unavailable, theme not persisted"),
    }
}

/// Set `data-theme` on the document root
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.data_attribute()) {
            warn!("could not apply theme: {:?}", e);
        }
    }
}
