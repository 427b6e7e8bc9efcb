//! Single-assignment slot shared by competing async producers.

use std::cell::OnceCell;
use std::rc::Rc;

/// Only the first value offered is kept; later offers are rejected.
///
/// Clones share the same slot, so each producer can hold its own handle.
#[derive(Debug)]
pub struct FirstWins<T> {
    slot: Rc<OnceCell<T>>,
}

impl<T> Clone for FirstWins<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for FirstWins<T> {
    fn default() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }
}

impl<T> FirstWins<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this value was accepted.
    pub fn offer(&self, value: T) -> bool {
        self.slot.set(value).is_ok()
    }

    pub fn is_filled(&self) -> bool {
        self.slot.get().is_some()
    }

    #[cfg(test)]
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_writer_wins() {
        let slot = FirstWins::new();
        let primary = slot.clone();
        let fallback = slot.clone();

        assert!(!slot.is_filled());
        assert!(primary.offer("<h2>Manage</h2>".to_string()));
        assert!(!fallback.offer("<h2>Template</h2>".to_string()));
        assert_eq!(slot.get().map(String::as_str), Some("<h2>Manage</h2>"));
    }

    #[test]
    fn test_fallback_can_win_when_first() {
        let slot = FirstWins::new();
        assert!(slot.clone().offer(2));
        assert!(!slot.offer(1));
        assert_eq!(slot.get(), Some(&2));
    }
}
