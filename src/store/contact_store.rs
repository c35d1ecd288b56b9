use super::ContactList;
use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};

/// Owner of the session's contact list.
///
/// All changes go through `upsert` and `remove_at` (or their id-based
/// counterparts). A failed call leaves the list exactly as it was.
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: ContactList,
    next_id: u64,
}

impl ContactStore {
    /// Create a store holding an empty list.
    pub fn new() -> Self {
        Self {
            contacts: ContactList::new(),
            next_id: 1,
        }
    }

    /// The current list.
    pub fn snapshot(&self) -> ContactList {
        self.contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Add or replace a contact.
    ///
    /// With `position` set to `None` the record is appended. Otherwise it
    /// replaces the contact at `position`, which keeps its id.
    ///
    /// # Errors
    ///
    /// * `StoreError::Validation` if a field is empty after trimming or the
    ///   category is unknown. Checked before the position.
    /// * `StoreError::Index` if `position` is out of bounds.
    pub fn upsert(
        &mut self,
        draft: &ContactDraft,
        position: Option<usize>,
    ) -> StoreResult<ContactList> {
        let fields = draft.validate()?;

        let next = match position {
            None => {
                let id = ContactId::from_sequence(self.next_id);
                let contact = Contact::from_fields(id, fields);
                tracing::info!(id = %contact.id, name = %contact.name, "Contact added");
                self.next_id += 1;
                self.contacts.appended(contact)
            }
            Some(position) => {
                let id = self.contacts.get(position)?.id.clone();
                let contact = Contact::from_fields(id, fields);
                tracing::info!(id = %contact.id, position, "Contact updated");
                self.contacts.replaced(position, contact)?
            }
        };

        self.contacts = next;
        Ok(self.snapshot())
    }

    /// Remove the contact at `position`.
    ///
    /// Contacts after `position` move down by one, so any position held by
    /// the caller is stale afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Index` if `position` is out of bounds.
    pub fn remove_at(&mut self, position: usize) -> StoreResult<(ContactList, Contact)> {
        let (next, removed) = self.contacts.removed(position)?;
        tracing::info!(id = %removed.id, position, "Contact removed");
        self.contacts = next;
        Ok((self.snapshot(), removed))
    }

    /// The contact at `position`.
    pub fn get(&self, position: usize) -> StoreResult<&Contact> {
        self.contacts.get(position)
    }

    pub fn get_by_id(&self, id: &ContactId) -> StoreResult<&Contact> {
        self.contacts.get_by_id(id)
    }

    pub fn position_of(&self, id: &ContactId) -> Option<usize> {
        self.contacts.position_of(id)
    }

    /// Replace the contact with the given id.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` for an unknown id, otherwise as [`Self::upsert`].
    pub fn upsert_by_id(
        &mut self,
        draft: &ContactDraft,
        id: &ContactId,
    ) -> StoreResult<ContactList> {
        let position = self.resolve(id)?;
        self.upsert(draft, Some(position))
    }

    /// Remove the contact with the given id.
    pub fn remove_by_id(&mut self, id: &ContactId) -> StoreResult<(ContactList, Contact)> {
        let position = self.resolve(id)?;
        self.remove_at(position)
    }

    fn resolve(&self, id: &ContactId) -> StoreResult<usize> {
        self.contacts
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, ValidationError};

    fn draft(name: &str, phone: &str, category: &str) -> ContactDraft {
        ContactDraft::new(name, phone, category)
    }

    #[test]
    fn test_upsert_append_assigns_fresh_ids() {
        let mut store = ContactStore::new();
        store.upsert(&draft("Ana", "111", "Family"), None).unwrap();
        let list = store.upsert(&draft("Bo", "222", "Work"), None).unwrap();

        assert_eq!(list.get(0).unwrap().id.as_str(), "contact_1");
        assert_eq!(list.get(1).unwrap().id.as_str(), "contact_2");
    }

    #[test]
    fn test_upsert_replace_keeps_id() {
        let mut store = ContactStore::new();
        store.upsert(&draft("Ana", "111", "Family"), None).unwrap();
        let list = store.upsert(&draft("Ana B", "999", "Work"), Some(0)).unwrap();

        let contact = list.get(0).unwrap();
        assert_eq!(contact.id.as_str(), "contact_1");
        assert_eq!(contact.name, "Ana B");
        assert_eq!(contact.phone, "999");
    }

    #[test]
    fn test_failed_append_does_not_consume_an_id() {
        let mut store = ContactStore::new();
        assert!(store.upsert(&draft("Cy", "", "Work"), None).is_err());
        let list = store.upsert(&draft("Cy", "333", "Work"), None).unwrap();
        assert_eq!(list.get(0).unwrap().id.as_str(), "contact_1");
    }

    #[test]
    fn test_validation_is_reported_before_index() {
        let mut store = ContactStore::new();
        let err = store.upsert(&draft("", "111", "Work"), Some(5)).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(ValidationError::EmptyField(Field::Name))
        );
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = ContactStore::new();
        store.upsert(&draft("Ana", "111", "Family"), None).unwrap();
        store.remove_at(0).unwrap();
        let list = store.upsert(&draft("Bo", "222", "Work"), None).unwrap();
        assert_eq!(list.get(0).unwrap().id.as_str(), "contact_2");
    }

    #[test]
    fn test_id_operations_follow_shifts() {
        let mut store = ContactStore::new();
        store.upsert(&draft("Ana", "111", "Family"), None).unwrap();
        store.upsert(&draft("Bo", "222", "Work"), None).unwrap();
        let bo = store.get(1).unwrap().id.clone();

        store.remove_at(0).unwrap();
        assert_eq!(store.position_of(&bo), Some(0));

        let list = store.upsert_by_id(&draft("Bo", "2222", "Work"), &bo).unwrap();
        assert_eq!(list.get(0).unwrap().phone, "2222");

        let (list, removed) = store.remove_by_id(&bo).unwrap();
        assert_eq!(removed.name, "Bo");
        assert!(list.is_empty());
        assert!(matches!(store.remove_by_id(&bo), Err(StoreError::NotFound(_))));
    }
}
