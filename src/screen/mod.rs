//! Headless contact-list screen.
//!
//! [`ContactScreen`] holds the state of the screen a user interacts with: the
//! rendered list, the add/edit modal form and the blocking notice shown after
//! a failed action. Rendering is left to whoever drives the screen; this
//! module only decides what to show.

use crate::domain::{Category, ContactId};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::prompt::ConfirmationPrompt;
use crate::store::{ContactList, ContactStore};
use serde::Serialize;

/// Shown in place of the list while it is empty.
pub const EMPTY_MESSAGE: &str = "No contacts yet!";

/// Title of the delete confirmation prompt.
pub const DELETE_TITLE: &str = "Delete contact?";

/// State of the modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// The modal is closed.
    Hidden,

    /// The modal is open for a new contact.
    Adding,

    /// The modal is open for the contact with `id`. Its position is looked
    /// up on demand since deletes shift it.
    Editing { id: ContactId },
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub position: usize,
    pub id: ContactId,
    pub title: String,
    pub description: String,
    pub avatar: String,
}

impl ContactRow {
    fn new(position: usize, contact: &Contact) -> Self {
        Self {
            position,
            id: contact.id.clone(),
            title: contact.name.clone(),
            description: contact.description(),
            avatar: contact.avatar_label(),
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Contact),
    Cancelled,
}

/// The contact-list screen.
#[derive(Debug)]
pub struct ContactScreen {
    store: ContactStore,
    contacts: ContactList,
    form: FormMode,
    draft: ContactDraft,
    default_category: Category,
    notice: Option<String>,
}

impl ContactScreen {
    /// Create a screen with an empty list.
    ///
    /// `default_category` prefills the category field of new contacts.
    pub fn new(default_category: Category) -> Self {
        let store = ContactStore::new();
        Self {
            contacts: store.snapshot(),
            store,
            form: FormMode::Hidden,
            draft: ContactDraft::default(),
            default_category,
            notice: None,
        }
    }

    /// The list as currently rendered.
    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    pub fn rows(&self) -> Vec<ContactRow> {
        self.contacts
            .iter()
            .enumerate()
            .map(|(position, contact)| ContactRow::new(position, contact))
            .collect()
    }

    /// Placeholder text to show instead of the rows, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.contacts.is_empty().then_some(EMPTY_MESSAGE)
    }

    pub fn form(&self) -> &FormMode {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form != FormMode::Hidden
    }

    /// Where the contact being edited sits now, if the edit form is open.
    pub fn editing_position(&self) -> Option<usize> {
        match &self.form {
            FormMode::Editing { id } => self.contacts.position_of(id),
            FormMode::Hidden | FormMode::Adding => None,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Prompt shown at the top of the open form.
    pub fn form_prompt(&self) -> Option<&'static str> {
        match self.form {
            FormMode::Hidden => None,
            FormMode::Adding => Some("Enter your new contact:"),
            FormMode::Editing { .. } => Some("Edit contact:"),
        }
    }

    /// Label of the form's submit button.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self.form {
            FormMode::Hidden => None,
            FormMode::Adding => Some("Add"),
            FormMode::Editing { .. } => Some("Save changes"),
        }
    }

    /// The blocking notice left by the last failed action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Open an empty form for a new contact.
    pub fn open_new_form(&mut self) {
        self.draft = ContactDraft::new("", "", self.default_category.as_str());
        self.form = FormMode::Adding;
    }

    /// Open the form prefilled with the contact at `position`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Index` if `position` is out of bounds. The form
    /// stays as it was.
    pub fn open_edit_form(&mut self, position: usize) -> StoreResult<()> {
        let found = self.store.get(position).cloned();
        let contact = self.record(found)?;
        self.draft = contact.to_draft();
        self.form = FormMode::Editing { id: contact.id };
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    /// Submit the form.
    ///
    /// A new contact is appended; an edited one is replaced where it now
    /// sits. A hidden form submits its draft as a new contact. On success
    /// the form closes and the draft is cleared. On failure the form stays
    /// open with the draft intact and the error becomes the notice.
    pub fn submit_form(&mut self) -> StoreResult<ContactList> {
        let position = match &self.form {
            FormMode::Hidden | FormMode::Adding => None,
            FormMode::Editing { id } => Some(
                self.store
                    .position_of(id)
                    .ok_or_else(|| StoreError::NotFound(id.clone())),
            ),
        }
        .transpose();

        let result = position.and_then(|position| self.store.upsert(&self.draft, position));
        let contacts = self.record(result)?;

        self.contacts = contacts.clone();
        self.draft = ContactDraft::default();
        self.form = FormMode::Hidden;
        Ok(contacts)
    }

    /// Close the form without saving.
    pub fn cancel_form(&mut self) {
        self.draft = ContactDraft::default();
        self.form = FormMode::Hidden;
    }

    /// Ask `prompt` whether to delete the contact at `position`, and delete
    /// it if confirmed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Index` if `position` is out of bounds; the prompt
    /// is not shown in that case.
    pub async fn request_delete(
        &mut self,
        position: usize,
        prompt: &dyn ConfirmationPrompt,
    ) -> StoreResult<DeleteOutcome> {
        let found = self.store.get(position).cloned();
        let contact = self.record(found)?;
        let message = format!("Remove \"{}\"?", contact.name);

        if !prompt.confirm(DELETE_TITLE, &message).await.is_confirmed() {
            tracing::debug!(id = %contact.id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let result = self.store.remove_at(position);
        let (contacts, removed) = self.record(result)?;
        self.contacts = contacts;

        if matches!(&self.form, FormMode::Editing { id } if *id == removed.id) {
            self.cancel_form();
        }

        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Keep the error of a failed action as the notice.
    fn record<T>(&mut self, result: StoreResult<T>) -> StoreResult<T> {
        match result {
            Ok(value) => {
                self.notice = None;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!("Contact screen action rejected: {}", e);
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for ContactScreen {
    fn default() -> Self {
        Self::new(Category::default())
    }
}
