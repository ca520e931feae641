//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::config::AppConfig;
use crate::store::UiStore;
use crate::toast::ToastNotifier;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Toasts and applied theme
    pub store: UiStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: UiStore) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(self.config.with_value(|c| c.api_base.clone()))
    }

    pub fn notifier(&self) -> ToastNotifier {
        self.config.with_value(|c| ToastNotifier::new(self.store, c.toast_duration_ms, c.toast_fade_ms))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
