//! In-memory resource storage with locked id assignment.
//! Used by: handlers, state.

use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::model::Resource;

/// Ordered collection of one schema's entities. Ids are unique and assigned
/// in insertion order; id assignment and append happen under one lock so
/// concurrent creates can never share an id or tear an entry.
pub struct ResourceStore<T: Resource> {
    entries: Mutex<Vec<T>>,
}

impl<T: Resource> ResourceStore<T> {
    /// Store pre-populated with the schema's fixed seed rows.
    pub fn seeded() -> Self {
        Self::with_entries(T::seed())
    }

    pub fn with_entries(entries: Vec<T>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>> {
        self.entries.lock().map_err(|_| Error::LockPoisoned(T::KIND))
    }

    /// All entities in insertion order.
    pub fn list(&self) -> Result<Vec<T>> {
        Ok(self.lock()?.clone())
    }

    /// First entity whose id matches; ids are unique so it is also the only one.
    pub fn get(&self, id: u64) -> Result<T> {
        self.lock()?
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
            .ok_or(Error::NotFound(T::KIND))
    }

    /// Assign `len + 1` as the id and append. The draft carries no id, so any
    /// id the client sent never reaches the store.
    pub fn create(&self, draft: T::Draft) -> Result<T> {
        let mut entries = self.lock()?;
        let entity = T::assign(draft, entries.len() as u64 + 1);
        entries.push(entity.clone());
        Ok(entity)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
