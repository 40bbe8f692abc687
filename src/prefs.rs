use crate::selection::Theme;

pub const THEME_KEY: &str = "theme";

/// Durable string key/value storage, `localStorage` in the browser.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Missing or unrecognised values fall back to the light theme.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &impl PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Flips the theme and persists the result.
pub fn toggle_theme(store: &impl PreferenceStore, theme: Theme) -> Theme {
    let theme = theme.toggled();
    save_theme(store, theme);
    theme
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct MemoryPreferences {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.into(), value.into());
        }
    }

    #[test]
    fn toggle_survives_reload() {
        let store = MemoryPreferences::default();
        let theme = load_theme(&store);
        assert_eq!(theme, Theme::Light);

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // a "reload" reads the same store again
        assert_eq!(load_theme(&store), Theme::Dark);

        toggle_theme(&store, load_theme(&store));
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn unknown_value_falls_back_to_light() {
        let store = MemoryPreferences::default();
        store.set(THEME_KEY, "\"dark\"");
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
