//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::theme::Theme;
use crate::toast::{Severity, ToastStack};

/// Page-wide transient state
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts
    pub toasts: ToastStack,
    /// Theme currently applied to the document
    pub theme: Theme,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Default::default() }
    }
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_toast(store: &UiStore, message: &str, severity: Severity) -> u32 {
    store.toasts().write().push(message, severity)
}

pub fn store_mark_toast_leaving(store: &UiStore, id: u32) {
    store.toasts().write().mark_leaving(id);
}

pub fn store_remove_toast(store: &UiStore, id: u32) {
    store.toasts().write().remove(id);
}

pub fn store_set_theme(store: &UiStore, theme: Theme) {
    *store.theme().write() = theme;
}
