//! Toast Notifications
//!
//! Transient, self-dismissing messages stacked in the corner of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::store::{store_mark_toast_leaving, store_push_toast, store_remove_toast, UiStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "toast-info",
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Warning => "toast-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    /// Fading out, removed once the fade ends
    pub leaving: bool,
}

/// Anything that can show a user notification.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);

    fn info(&self, message: &str) {
        self.notify(message, Severity::Info);
    }
}

/// Toasts on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    pub items: Vec<Toast>,
    next_id: u32,
}

impl ToastStack {
    pub fn push(&mut self, message: &str, severity: Severity) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, message: message.to_string(), severity, leaving: false });
        id
    }

    pub fn mark_leaving(&mut self, id: u32) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }
}

/// Store-backed notifier. Each toast runs its own timer task, so callers
/// never wait and toasts expire independently.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: UiStore,
    display_ms: u32,
    fade_ms: u32,
}

impl ToastNotifier {
    pub fn new(store: UiStore, display_ms: u32, fade_ms: u32) -> Self {
        Self { store, display_ms, fade_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        log::info!("[TOAST] {:?}: {}", severity, message);
        let store = self.store;
        let (display_ms, fade_ms) = (self.display_ms, self.fade_ms);
        let id = store_push_toast(&store, message, severity);

        spawn_local(async move {
            TimeoutFuture::new(display_ms).await;
            store_mark_toast_leaving(&store, id);
            TimeoutFuture::new(fade_ms).await;
            store_remove_toast(&store, id);
        });
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_and_expire_independently() {
        let mut stack = ToastStack::default();
        let first = stack.push("um", Severity::Info);
        let second = stack.push("dois", Severity::Error);
        assert_ne!(first, second);
        assert_eq!(stack.items.len(), 2);

        stack.mark_leaving(first);
        assert!(stack.items[0].leaving);
        assert!(!stack.items[1].leaving);

        stack.remove(first);
        assert_eq!(stack.items.len(), 1);
        assert_eq!(stack.items[0].message, "dois");
        assert_eq!(stack.items[0].severity, Severity::Error);

        // unknown ids are ignored
        stack.remove(first);
        stack.mark_leaving(99);
        assert_eq!(stack.items.len(), 1);
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Warning.css_class(), "toast-warning");
    }
}
