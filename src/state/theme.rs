//! Light/dark theme preference.
//!
//! The preference is one boolean persisted as `"true"`/`"false"`. Anything
//! else, including a missing key, reads as light mode. What the page shows
//! is derived from the boolean alone, so re-applying it is idempotent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::ControllerError;
use crate::util::storage::PreferenceStore;

pub const DARK_ICON_CLASS: &str = "fas fa-sun";
pub const LIGHT_ICON_CLASS: &str = "fas fa-moon";
pub const DARK_TITLE: &str = "Switch to Light Mode";
pub const LIGHT_TITLE: &str = "Switch to Dark Mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Read the stored preference.
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        Self { dark: store.get(key).as_deref() == Some("true") }
    }

    /// Flip the preference and persist it.
    ///
    /// The in-memory value flips even when the write fails, so the page
    /// still follows the click.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write is rejected.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore, key: &str) -> Result<(), ControllerError> {
        self.dark = !self.dark;
        store.set(key, if self.dark { "true" } else { "false" })
    }

    pub fn visuals(self) -> ThemeVisuals {
        if self.dark {
            ThemeVisuals { dark: true, icon_class: DARK_ICON_CLASS, title: DARK_TITLE }
        } else {
            ThemeVisuals { dark: false, icon_class: LIGHT_ICON_CLASS, title: LIGHT_TITLE }
        }
    }
}

/// Everything the page renders for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeVisuals {
    /// Whether the page-wide dark marker class is present.
    pub dark: bool,
    pub icon_class: &'static str,
    pub title: &'static str,
}

/// Rendering surface for the theme.
pub trait ThemeSurface {
    /// Add or remove the page-wide dark marker.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface cannot be updated.
    fn set_page_dark(&mut self, dark: bool) -> Result<(), ControllerError>;

    /// Swap the toggle's icon. No-op without a toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface cannot be updated.
    fn set_toggle_icon(&mut self, class: &str) -> Result<(), ControllerError>;

    /// Update the toggle's tooltip. No-op without a toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface cannot be updated.
    fn set_toggle_title(&mut self, title: &str) -> Result<(), ControllerError>;
}

/// Render `visuals` onto `surface`.
///
/// # Errors
///
/// Propagates the first surface error.
pub fn apply_theme(surface: &mut dyn ThemeSurface, visuals: &ThemeVisuals) -> Result<(), ControllerError> {
    surface.set_page_dark(visuals.dark)?;
    surface.set_toggle_icon(visuals.icon_class)?;
    surface.set_toggle_title(visuals.title)
}
