//! In-memory record table shared by every request handler of a service.
//!
//! Rows live in a `BTreeMap` keyed by id behind a single `RwLock`, so listing
//! is always in id order and every mutation is serialized. Ids start at 1 and
//! are never reused, even after deletes.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AppError, Result};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

pub struct MemoryStore<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table<T>>> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("store lock poisoned (read)".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table<T>>> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("store lock poisoned (write)".to_string()))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn check_health(&self) -> Result<()> {
        self.read().map(|_| ())
    }
}

impl<T: Clone> MemoryStore<T> {
    pub fn all(&self) -> Result<Vec<T>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    pub fn get(&self, id: i32) -> Result<Option<T>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    /// Reserves the next id and stores the row built from it.
    pub fn insert_with<F>(&self, build: F) -> Result<T>
    where
        F: FnOnce(i32) -> T,
    {
        let mut table = self.write()?;
        let id = table.next_id;
        let row = build(id);
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::InternalError("id space exhausted".to_string()))?;
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Applies `apply` to the row in place. `None` when the id is unknown.
    pub fn update_with<F>(&self, id: i32, apply: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let mut table = self.write()?;
        Ok(table.rows.get_mut(&id).map(|row| {
            apply(row);
            row.clone()
        }))
    }

    pub fn remove(&self, id: i32) -> Result<Option<T>> {
        Ok(self.write()?.rows.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i32,
        label: &'static str,
    }

    #[test]
    fn ids_are_monotonic_and_not_reused() {
        let store = MemoryStore::new();
        let a = store.insert_with(|id| Row { id, label: "a" }).unwrap();
        let b = store.insert_with(|id| Row { id, label: "b" }).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.remove(b.id).unwrap();
        let c = store.insert_with(|id| Row { id, label: "c" }).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn all_is_ordered_by_id() {
        let store = MemoryStore::new();
        for label in ["x", "y", "z"] {
            store.insert_with(|id| Row { id, label }).unwrap();
        }
        store.remove(2).unwrap();

        let ids: Vec<i32> = store.all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn update_missing_row_creates_nothing() {
        let store: MemoryStore<Row> = MemoryStore::new();
        let updated = store.update_with(7, |row| row.label = "never").unwrap();
        assert!(updated.is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn update_is_visible_to_clones() {
        let store = MemoryStore::new();
        let shared = store.clone();
        store.insert_with(|id| Row { id, label: "old" }).unwrap();

        let updated = shared.update_with(1, |row| row.label = "new").unwrap();
        assert_eq!(updated, Some(Row { id: 1, label: "new" }));
        assert_eq!(store.get(1).unwrap().unwrap().label, "new");
    }

    #[test]
    fn concurrent_inserts_get_distinct_ids() {
        let store: MemoryStore<Row> = MemoryStore::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|_| store.insert_with(|id| Row { id, label: "t" }).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.len().unwrap(), 200);
    }
}
