//! Resource Binder
//!
//! Generic list/create/update/delete flow for one REST resource. The binder
//! talks to the backend and the notifier only; views apply the outcomes to
//! their own signals. Every successful mutation re-fetches the list, so the
//! server stays the single source of truth.

use serde_json::Value;

use crate::api::{ApiError, ApiRequest, Transport};
use crate::forms::{build_payload, initial_values, FormField, FormValues, MissingField};
use crate::render::{render_rows, TableBody};
use crate::resources::Resource;
use crate::toast::{Notifier, Severity};

/// Interactive yes/no prompt guarding destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Server accepted the change. `reloaded` is `None` when the follow-up
    /// fetch failed (already reported).
    Applied { reloaded: Option<Vec<Value>> },
    /// Server or transport refused; nothing changed locally
    Rejected,
    /// User declined the confirmation; no request was made
    Cancelled,
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied { .. })
    }
}

/// Outcome of submitting a form through the binder.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A required field was blank; no request was made
    Incomplete(MissingField),
    Sent(Mutation),
}

impl Submission {
    pub fn mutation(&self) -> Option<&Mutation> {
        match self {
            Submission::Sent(mutation) => Some(mutation),
            Submission::Incomplete(_) => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.mutation().is_some_and(Mutation::is_applied)
    }

    /// Create form contents after this submission. Only an accepted record
    /// resets the form.
    pub fn next_form_values(&self, fields: &[FormField], current: FormValues) -> FormValues {
        if self.is_applied() {
            initial_values(fields)
        } else {
            current
        }
    }

    /// Row the inline editor shows after saving. A refused edit stays open.
    pub fn next_editing(&self, editing: Option<i64>) -> Option<i64> {
        if self.is_applied() {
            None
        } else {
            editing
        }
    }
}

fn missing_field_message(missing: &MissingField) -> String {
    format!("⚠️ Preencha o campo \"{}\".", missing.label)
}

/// What a resource table currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    /// First load failed
    Failed,
    Loaded(Vec<Value>),
}

impl ListState {
    /// A failed reload keeps the last good rows on screen.
    pub fn load_failed(&mut self) {
        if !matches!(self, ListState::Loaded(_)) {
            *self = ListState::Failed;
        }
    }

    pub fn apply(&mut self, mutation: &Mutation) {
        if let Mutation::Applied { reloaded: Some(rows) } = mutation {
            *self = ListState::Loaded(rows.clone());
        }
    }

    pub fn body(&self, resource: &Resource) -> TableBody {
        match self {
            ListState::Loading => resource.table.placeholder("Carregando…"),
            ListState::Failed => resource.table.placeholder(resource.messages.load_failed),
            ListState::Loaded(rows) => render_rows(rows, &resource.table),
        }
    }
}

pub struct Binder<'a, T, N> {
    resource: &'static Resource,
    transport: &'a T,
    notifier: &'a N,
}

impl<'a, T: Transport, N: Notifier> Binder<'a, T, N> {
    pub fn new(resource: &'static Resource, transport: &'a T, notifier: &'a N) -> Self {
        Self { resource, transport, notifier }
    }

    async fn fetch_rows(&self) -> Result<Vec<Value>, ApiError> {
        self.transport
            .send(ApiRequest::get(self.resource.endpoint))
            .await?
            .into_list()
    }

    /// GET the collection. Failures notify a warning and return `None`.
    pub async fn load(&self) -> Option<Vec<Value>> {
        match self.fetch_rows().await {
            Ok(rows) => {
                log::debug!("[BINDER] {} rows from {}", rows.len(), self.resource.endpoint);
                Some(rows)
            }
            Err(err) => {
                log::warn!("[BINDER] list {} failed: {}", self.resource.endpoint, err);
                self.notifier.notify(self.resource.messages.load_failed, Severity::Warning);
                None
            }
        }
    }

    /// Validates the create form and POSTs it.
    pub async fn submit_create(&self, values: &FormValues) -> Submission {
        match self.payload(self.resource.fields, values) {
            Ok(payload) => Submission::Sent(self.create(payload).await),
            Err(incomplete) => incomplete,
        }
    }

    /// Validates the inline edit surface and PUTs it.
    pub async fn submit_update(&self, id: i64, values: &FormValues) -> Submission {
        let fields = self.resource.editor.unwrap_or_default();
        match self.payload(fields, values) {
            Ok(payload) => Submission::Sent(self.update(id, payload).await),
            Err(incomplete) => incomplete,
        }
    }

    fn payload(&self, fields: &[FormField], values: &FormValues) -> Result<Value, Submission> {
        build_payload(fields, values).map_err(|missing| {
            log::debug!("[BINDER] required field {} is empty", missing.name);
            self.notifier.notify(&missing_field_message(&missing), Severity::Warning);
            Submission::Incomplete(missing)
        })
    }

    pub async fn create(&self, payload: Value) -> Mutation {
        let request = ApiRequest::post(self.resource.endpoint, payload);
        self.mutate(request, self.resource.messages.created).await
    }

    pub async fn update(&self, id: i64, payload: Value) -> Mutation {
        if !self.resource.can_update() {
            log::error!("[BINDER] {} does not support updates", self.resource.endpoint);
            return Mutation::Rejected;
        }
        let request = ApiRequest::put(self.resource.item_path(id), payload);
        self.mutate(request, self.resource.messages.updated).await
    }

    pub async fn delete<C: Confirm>(&self, id: i64, confirm: &C) -> Mutation {
        if !confirm.confirm(self.resource.messages.confirm_delete) {
            return Mutation::Cancelled;
        }
        let request = ApiRequest::delete(self.resource.item_path(id));
        self.mutate(request, self.resource.messages.deleted).await
    }

    async fn mutate(&self, request: ApiRequest, success: &str) -> Mutation {
        let method = request.method.as_str();
        let path = request.path.clone();
        let result = match self.transport.send(request).await {
            Ok(response) => response.into_ack(),
            Err(err) => Err(err),
        };

        match result {
            Ok(_) => {
                log::info!("[BINDER] {} {} ok", method, path);
                self.notifier.notify(success, Severity::Success);
                Mutation::Applied { reloaded: self.load().await }
            }
            Err(err) => {
                log::warn!("[BINDER] {} {} failed: {}", method, path, err);
                self.notifier.notify(&format!("❌ {}", err), Severity::Error);
                Mutation::Rejected
            }
        }
    }
}
