//! Form controller - turns operator actions into store calls

use crate::record::{Field, ServiceDraft, ServiceRecord};
use crate::storage::RecordStore;
use crate::{Error, ValidationError};
use super::notice::{Notice, Notifier, TITLE_DATABASE_ERROR, TITLE_ERROR, TITLE_SUCCESS};

/// The five input fields of the form
pub type FormFields = ServiceDraft;

pub const MSG_ADDED: &str = "Servicio agregado con éxito";
pub const MSG_REMOVED: &str = "Servicio eliminado con éxito";
pub const MSG_UPDATED: &str = "Servicio actualizado con éxito";

/// What became of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store call ran and the list was reloaded
    Done,
    /// Rejected by form validation before reaching the store
    Rejected,
    /// The store reported an error
    Failed,
    /// Nothing selected; nothing happened
    Skipped,
}

/// Owns the form state and dispatches the five actions plus selection.
///
/// Every action that touches the store ends in a full reload: the visible
/// list is cleared and rebuilt from a fresh query, and the selection is
/// dropped.
pub struct FormController<N: Notifier> {
    store: RecordStore,
    notifier: N,
    fields: FormFields,
    rows: Vec<ServiceRecord>,
    selected: Option<usize>,
}

impl<N: Notifier> FormController<N> {
    /// Build the controller and load the full list
    pub fn new(store: RecordStore, notifier: N) -> Self {
        let mut controller = Self {
            store,
            notifier,
            fields: FormFields::default(),
            rows: Vec::new(),
            selected: None,
        };
        controller.reload();
        controller
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Replace all five inputs at once
    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Rows currently shown in the list view
    pub fn rows(&self) -> &[ServiceRecord] {
        &self.rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selection(&self) -> Option<&ServiceRecord> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    // ========== Actions ==========

    /// Insert a new service from the inputs
    pub fn add(&mut self) -> Outcome {
        let service = match self.fields.validate() {
            Ok(service) => service,
            Err(e) => return self.reject(e),
        };

        match self.store.insert(&service) {
            Ok(_) => {
                self.notifier.notify(Notice::info(TITLE_SUCCESS, MSG_ADDED));
                self.reload();
                self.fields.clear();
                Outcome::Done
            }
            Err(e) => self.fail(e),
        }
    }

    /// Delete the selected service
    pub fn remove(&mut self) -> Outcome {
        let Some(id) = self.selection().map(|r| r.id) else {
            return Outcome::Skipped;
        };

        match self.store.delete(id) {
            Ok(_) => {
                self.notifier.notify(Notice::info(TITLE_SUCCESS, MSG_REMOVED));
                self.reload();
                Outcome::Done
            }
            Err(e) => self.fail(e),
        }
    }

    /// Overwrite the selected service with the inputs
    pub fn update(&mut self) -> Outcome {
        let Some(id) = self.selection().map(|r| r.id) else {
            return Outcome::Skipped;
        };

        let service = match self.fields.validate() {
            Ok(service) => service,
            Err(e) => return self.reject(e),
        };

        match self.store.update(id, &service) {
            Ok(_) => {
                self.notifier.notify(Notice::info(TITLE_SUCCESS, MSG_UPDATED));
                self.reload();
                self.fields.clear();
                Outcome::Done
            }
            Err(e) => self.fail(e),
        }
    }

    /// Show only services whose name contains the name input
    pub fn search(&mut self) -> Outcome {
        if self.fields.name.is_empty() {
            return self.reject(ValidationError::EmptySearchTerm);
        }

        let result = self.store.search_by_name(&self.fields.name);
        self.replace_rows(result)
    }

    /// Reload the full list
    pub fn show_all(&mut self) -> Outcome {
        self.reload()
    }

    /// Select a row of the list (or clear the selection with `None`).
    ///
    /// A selected row's fields overwrite whatever is in the inputs.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.rows.len());
        if let Some(record) = self.selection() {
            self.fields = record.to_draft();
        }
    }

    // ========== Helpers ==========

    fn reload(&mut self) -> Outcome {
        let result = self.store.fetch_all();
        self.replace_rows(result)
    }

    fn replace_rows(&mut self, result: crate::Result<Vec<ServiceRecord>>) -> Outcome {
        self.rows.clear();
        self.selected = None;

        match result {
            Ok(rows) => {
                self.rows = rows;
                Outcome::Done
            }
            Err(e) => self.fail(e),
        }
    }

    fn reject(&mut self, error: ValidationError) -> Outcome {
        tracing::warn!("Rejected: {}", error);
        self.notifier.notify(Notice::error(TITLE_ERROR, error.to_string()));
        Outcome::Rejected
    }

    fn fail(&mut self, error: Error) -> Outcome {
        tracing::error!("Store error: {}", error);
        self.notifier
            .notify(Notice::error(TITLE_DATABASE_ERROR, error.to_string()));
        Outcome::Failed
    }
}
