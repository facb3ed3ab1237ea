//! Row selection for bulk actions

use ra_core::traits::{Id, Identifiable};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<Id>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection of `id`, returning whether it is now selected
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: Id) {
        self.ids.insert(id);
    }

    pub fn deselect(&mut self, id: Id) {
        self.ids.remove(&id);
    }

    /// Select every given record, typically the currently visible rows
    pub fn select_all<'a, T, I>(&mut self, records: I)
    where
        T: Identifiable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.ids.extend(records.into_iter().map(Identifiable::id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer appear in `records`
    pub fn retain_existing<'a, T, I>(&mut self, records: I)
    where
        T: Identifiable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let present: BTreeSet<Id> = records.into_iter().map(Identifiable::id).collect();
        self.ids.retain(|id| present.contains(id));
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::directory;
    use crate::filters::UserFilter;
    use ra_models::UserStatus;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(3));
        assert!(selection.contains(3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_visible() {
        let records = directory();
        let visible = UserFilter::new().with_status(UserStatus::Inactive).apply(&records);

        let mut selection = Selection::new();
        selection.select(1);
        selection.select_all(visible);

        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![1, 3, 4]);
        selection.deselect(1);
        assert_eq!(selection.len(), 2);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_existing() {
        let mut records = directory();
        let mut selection = Selection::new();
        selection.select_all(&records);

        records.retain(|r| r.id % 2 == 1);
        selection.retain_existing(&records);

        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![1, 3, 5]);
    }
}
