//! Theme Preference
//!
//! Dark/light preference persisted in `localStorage["theme"]` and applied as
//! the `dark` class on the document element.

use std::fmt;

use crate::toast::Notifier;

const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Toast shown after a toggle
    pub fn announcement(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙 Modo escuro ativado",
            Theme::Light => "☀️ Modo claro ativado",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage`. Storage errors (private mode, quota) are logged
/// and otherwise ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("[THEME] could not persist {}={}: {:?}", key, value, err);
                }
            }
            None => log::warn!("[THEME] localStorage unavailable"),
        }
    }
}

/// Accessor/mutator pair over the persisted theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeSettings<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    pub const KEY: &'static str = "theme";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `None` when nothing (or garbage) is stored.
    pub fn stored(&self) -> Option<Theme> {
        self.store.read(Self::KEY).and_then(|v| Theme::parse(&v))
    }

    pub fn set(&self, theme: Theme) {
        self.store.write(Self::KEY, theme.as_str());
    }

    /// Flips `current`, persists and returns the new theme.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.set(next);
        next
    }

    /// Toggle button action: flip, persist, restyle `target` and announce.
    pub fn switch<C: ClassTarget, N: Notifier>(&self, current: Theme, target: &C, notifier: &N) -> Theme {
        let next = self.toggle(current);
        apply_theme_to(target, next);
        notifier.info(next.announcement());
        next
    }
}

/// Element whose class list carries the theme.
pub trait ClassTarget {
    fn has_class(&self, name: &str) -> bool;
    fn set_class(&self, name: &str, on: bool);
}

/// `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

impl ClassTarget for DocumentRoot {
    fn has_class(&self, name: &str) -> bool {
        Self::element().is_some_and(|el| el.class_list().contains(name))
    }

    fn set_class(&self, name: &str, on: bool) {
        let Some(root) = Self::element() else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(name, on) {
            log::warn!("[THEME] could not set class {}={}: {:?}", name, on, err);
        }
    }
}

pub fn theme_of<C: ClassTarget>(target: &C) -> Theme {
    if target.has_class(DARK_CLASS) { Theme::Dark } else { Theme::Light }
}

pub fn apply_theme_to<C: ClassTarget>(target: &C, theme: Theme) {
    target.set_class(DARK_CLASS, theme.is_dark());
}

/// Theme implied by the document's current `dark` class.
pub fn document_theme() -> Theme {
    theme_of(&DocumentRoot)
}

pub fn apply_theme(theme: Theme) {
    apply_theme_to(&DocumentRoot, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::testing::RecordingNotifier;
    use crate::toast::Severity;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for &MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct FakeRoot(RefCell<BTreeSet<String>>);

    impl ClassTarget for FakeRoot {
        fn has_class(&self, name: &str) -> bool {
            self.0.borrow().contains(name)
        }

        fn set_class(&self, name: &str, on: bool) {
            if on {
                self.0.borrow_mut().insert(name.to_string());
            } else {
                self.0.borrow_mut().remove(name);
            }
        }
    }

    #[test]
    fn test_switch_twice_restores_class_and_storage() {
        let memory = MemoryStore::default();
        let settings = ThemeSettings::new(&memory);
        let root = FakeRoot::default();
        let notifier = RecordingNotifier::default();

        settings.set(Theme::Light);
        apply_theme_to(&root, Theme::Light);
        let start = theme_of(&root);

        let once = settings.switch(start, &root, &notifier);
        assert!(root.has_class("dark"));
        assert_eq!(theme_of(&root), Theme::Dark);

        let twice = settings.switch(once, &root, &notifier);
        assert_eq!(twice, start);
        assert!(!root.has_class("dark"));
        assert_eq!(settings.stored(), Some(Theme::Light));
        assert_eq!(
            notifier.messages(),
            vec![
                ("🌙 Modo escuro ativado".to_string(), Severity::Info),
                ("☀️ Modo claro ativado".to_string(), Severity::Info),
            ]
        );
    }

    #[test]
    fn test_toggle_twice_restores_persisted_value() {
        let memory = MemoryStore::default();
        let settings = ThemeSettings::new(&memory);
        settings.set(Theme::Dark);

        let once = settings.toggle(Theme::Dark);
        assert_eq!(once, Theme::Light);
        assert_eq!(memory.0.borrow()["theme"], "light");

        let twice = settings.toggle(once);
        assert_eq!(twice, Theme::Dark);
        assert_eq!(settings.stored(), Some(Theme::Dark));
        assert_eq!(memory.0.borrow()["theme"], "dark");
    }

    #[test]
    fn test_stored_ignores_unknown_values() {
        let memory = MemoryStore::default();
        let settings = ThemeSettings::new(&memory);
        assert_eq!(settings.stored(), None);

        memory.0.borrow_mut().insert("theme".into(), "sepia".into());
        assert_eq!(settings.stored(), None);
    }

    #[test]
    fn test_announcement_follows_new_state() {
        assert_eq!(Theme::Light.toggled().announcement(), "🌙 Modo escuro ativado");
        assert_eq!(Theme::Dark.toggled().announcement(), "☀️ Modo claro ativado");
    }
}
