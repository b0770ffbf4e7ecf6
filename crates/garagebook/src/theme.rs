//! Theme preference for garagebook.
//!
//! The dark-mode flag is persisted separately from the data blob, under the
//! `darkMode` slot as the string `"true"` or `"false"`. It is read once at
//! startup and written back whenever it is toggled.

use crate::error::Result;
use crate::storage::{LocalStore, THEME_KEY};

/// The active presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Unstyled output.
    #[default]
    Light,
    /// ANSI-styled output.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Check if this is the dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The string persisted in the `darkMode` slot.
    #[must_use]
    pub fn slot_value(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Interpret a persisted slot value; only `"true"` selects dark.
    #[must_use]
    pub fn from_slot(value: Option<&str>) -> Self {
        if value == Some("true") {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Read the persisted theme preference.
///
/// # Errors
///
/// Returns an error if the slot read fails.
pub fn load(store: &LocalStore) -> Result<Theme> {
    let value = store.get(THEME_KEY)?;
    Ok(Theme::from_slot(value.as_deref()))
}

/// Persist the theme preference.
///
/// # Errors
///
/// Returns an error if the slot write fails.
pub fn save(store: &LocalStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.slot_value())
}

/// Flip the preference, persist the new value, and return it.
///
/// # Errors
///
/// Returns an error if the slot write fails.
pub fn toggle(store: &LocalStore, current: Theme) -> Result<Theme> {
    let next = current.toggled();
    save(store, next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_from_slot() {
        assert_eq!(Theme::from_slot(Some("true")), Theme::Dark);
        assert_eq!(Theme::from_slot(Some("false")), Theme::Light);
        assert_eq!(Theme::from_slot(Some("garbage")), Theme::Light);
        assert_eq!(Theme::from_slot(None), Theme::Light);
    }

    #[test]
    fn test_slot_value() {
        assert_eq!(Theme::Dark.slot_value(), "true");
        assert_eq!(Theme::Light.slot_value(), "false");
    }

    #[test]
    fn test_load_defaults_to_light() {
        let store = LocalStore::open_in_memory().unwrap();
        assert_eq!(load(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = LocalStore::open_in_memory().unwrap();

        let theme = load(&store).unwrap();
        let toggled = toggle(&store, theme).unwrap();
        assert_eq!(toggled, Theme::Dark);

        // Simulated reload: a fresh read sees the persisted flag.
        assert_eq!(load(&store).unwrap(), Theme::Dark);

        let toggled_back = toggle(&store, toggled).unwrap();
        assert_eq!(toggled_back, Theme::Light);
        assert_eq!(load(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_theme_persists_across_file_opens() {
        let temp_dir = std::env::temp_dir();
        let db_path = temp_dir.join(format!("garagebook_theme_{}.db", std::process::id()));

        {
            let store = LocalStore::open(&db_path).unwrap();
            save(&store, Theme::Dark).unwrap();
        }
        {
            let store = LocalStore::open(&db_path).unwrap();
            assert_eq!(load(&store).unwrap(), Theme::Dark);
        }

        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }
}
