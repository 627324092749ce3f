//! Mutually exclusive button groups.
//!
//! A group holds its options and at most one active index. Activating a
//! button implicitly deactivates its siblings, so the single-active
//! invariant holds by construction.

use crate::model::MetroFlag;

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup<T> {
    options: Vec<T>,
    active: Option<usize>,
}

impl<T> ButtonGroup<T> {
    /// Create a group with nothing selected.
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            active: None,
        }
    }

    /// Create a group with `index` pre-selected (ignored if out of range).
    pub fn with_active(options: Vec<T>, index: usize) -> Self {
        let mut group = Self::new(options);
        group.activate(index);
        group
    }

    /// Activate the button at `index`, deactivating the rest.
    ///
    /// Out-of-range indices leave the group untouched and return `None`.
    pub fn activate(&mut self, index: usize) -> Option<&T> {
        if index >= self.options.len() {
            return None;
        }
        self.active = Some(index);
        self.options.get(index)
    }

    /// Activate the first button matching `pred`.
    pub fn activate_where(&mut self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        let index = self.options.iter().position(pred)?;
        self.activate(index)
    }

    /// Activate the neighbour of the current button, wrapping at the ends.
    ///
    /// With nothing active, moving forward lands on the first button and
    /// moving backward on the last.
    pub fn activate_next(&mut self, forward: bool) -> Option<&T> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let index = match (self.active, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.activate(index)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|i| self.options.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Snapshot of the current selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub city: Option<&'a str>,
    /// `None` when the form has no metro toggle.
    pub metro: Option<MetroFlag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> ButtonGroup<&'static str> {
        ButtonGroup::new(vec!["Hyderabad", "Bengaluru", "Pune"])
    }

    #[test]
    fn test_new_group_has_no_selection() {
        let group = cities();
        assert_eq!(group.active(), None);
        assert!((0..group.len()).all(|i| !group.is_active(i)));
    }

    #[test]
    fn test_activate_replaces_previous() {
        let mut group = cities();
        group.activate(0);
        group.activate(2);
        assert_eq!(group.active(), Some(&"Pune"));
        assert!(!group.is_active(0));
        assert!(group.is_active(2));
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut group = cities();
        group.activate(1);
        assert_eq!(group.activate(7), None);
        assert_eq!(group.active(), Some(&"Bengaluru"));
    }

    #[test]
    fn test_activate_where() {
        let mut group = cities();
        assert_eq!(
            group.activate_where(|c| c.eq_ignore_ascii_case("pune")),
            Some(&"Pune")
        );
        assert_eq!(group.activate_where(|c| *c == "Austin"), None);
        assert_eq!(group.active_index(), Some(2));
    }

    #[test]
    fn test_activate_next_wraps() {
        let mut group = cities();
        assert_eq!(group.activate_next(true), Some(&"Hyderabad"));
        assert_eq!(group.activate_next(false), Some(&"Pune"));
        assert_eq!(group.activate_next(true), Some(&"Hyderabad"));
    }

    #[test]
    fn test_activate_next_from_empty_backward() {
        let mut group = cities();
        assert_eq!(group.activate_next(false), Some(&"Pune"));
    }

    #[test]
    fn test_empty_group() {
        let mut group: ButtonGroup<String> = ButtonGroup::new(Vec::new());
        assert_eq!(group.activate(0), None);
        assert_eq!(group.activate_next(true), None);
        assert!(group.is_empty());
    }

    #[test]
    fn test_with_active() {
        let group = ButtonGroup::with_active(MetroFlag::ALL.to_vec(), 0);
        assert_eq!(group.active(), Some(&MetroFlag::Yes));
    }
}
