//! Client-side entity cache owned by a page controller.

/// Anything with a stable identifier.
pub trait Keyed {
    type Key: PartialEq + Clone;

    fn key(&self) -> Self::Key;
}

/// Ordered in-memory list of records, addressed by key.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed + Clone> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == *key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.get(key).is_some()
    }

    /// Swap the whole list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the record with the same key in place, or append it.
    /// Returns `true` when an existing record was replaced.
    pub fn upsert(&mut self, item: T) -> bool {
        let key = item.key();
        match self.items.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => {
                self.items.push(item);
                false
            }
        }
    }

    /// Replace the record with the same key only if it is present.
    pub fn update(&mut self, item: T) -> bool {
        let key = item.key();
        match self.items.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let pos = self.items.iter().position(|item| item.key() == *key)?;
        Some(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        value: &'static str,
    }

    impl Keyed for Row {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn rows() -> EntityStore<Row> {
        EntityStore::from_items(vec![
            Row { id: 1, value: "a" },
            Row { id: 2, value: "b" },
            Row { id: 3, value: "c" },
        ])
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = rows();
        assert!(store.upsert(Row { id: 2, value: "B" }));
        assert_eq!(store.list()[1].value, "B");
        assert_eq!(store.len(), 3);

        assert!(!store.upsert(Row { id: 4, value: "d" }));
        assert_eq!(store.list().last().unwrap().id, 4);
    }

    #[test]
    fn test_update_ignores_missing() {
        let mut store = rows();
        assert!(!store.update(Row { id: 9, value: "z" }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_and_replace() {
        let mut store = rows();
        assert_eq!(store.remove(&1).map(|r| r.value), Some("a"));
        assert!(store.remove(&1).is_none());
        assert!(!store.contains(&1));
        assert_eq!(store.list().iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);

        store.replace(vec![Row { id: 7, value: "x" }]);
        assert_eq!(store.get(&7).map(|r| r.value), Some("x"));
        store.clear();
        assert!(store.is_empty());
    }
}
