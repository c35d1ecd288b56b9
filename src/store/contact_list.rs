use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::sync::Arc;

/// An immutable, ordered snapshot of the contact list.
///
/// Insertion order is display order. Cloning is cheap: snapshots share the
/// underlying storage, and a mutation in [`ContactStore`](super::ContactStore)
/// builds a new snapshot instead of touching a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Arc<Vec<Contact>>,
}

impl ContactList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contact at `position`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Index` if `position` is out of bounds.
    pub fn get(&self, position: usize) -> StoreResult<&Contact> {
        self.contacts.get(position).ok_or(StoreError::Index {
            position,
            len: self.len(),
        })
    }

    /// Current position of the contact with the given id, if present.
    pub fn position_of(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| &c.id == id)
    }

    /// The contact with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact carries `id`.
    pub fn get_by_id(&self, id: &ContactId) -> StoreResult<&Contact> {
        self.contacts
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    /// Names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }

    pub(crate) fn appended(&self, contact: Contact) -> Self {
        let mut contacts = Vec::with_capacity(self.len() + 1);
        contacts.extend(self.contacts.iter().cloned());
        contacts.push(contact);
        Self::from(contacts)
    }

    pub(crate) fn replaced(&self, position: usize, contact: Contact) -> StoreResult<Self> {
        self.get(position)?;
        let mut contacts = self.contacts.to_vec();
        contacts[position] = contact;
        Ok(Self::from(contacts))
    }

    pub(crate) fn removed(&self, position: usize) -> StoreResult<(Self, Contact)> {
        self.get(position)?;
        let mut contacts = self.contacts.to_vec();
        let removed = contacts.remove(position);
        Ok((Self::from(contacts), removed))
    }
}

impl From<Vec<Contact>> for ContactList {
    fn from(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(contacts),
        }
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
