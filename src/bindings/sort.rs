use crate::controller::NavigationController;
use crate::state::{NavigationState, SortOrder};
use crate::url::HistoryBackend;

/// Sort picker value, seeded from the URL and written back through the
/// controller.
#[derive(Clone, Copy, Debug)]
pub struct SortBinding {
    sort: SortOrder,
}

impl SortBinding {
    pub fn new<H: HistoryBackend>(nav: &NavigationController<H>) -> Self {
        Self {
            sort: nav.state().sort_order,
        }
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>, sort: SortOrder) -> bool {
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        nav.update_sort(sort)
    }

    /// Same as `set` but from the picker's key name; unknown keys are ignored.
    pub fn set_key<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>, key: &str) -> bool {
        match SortOrder::from_key(key) {
            Some(sort) => self.set(nav, sort),
            None => {
                log::debug!("Ignoring unknown sort key '{key}'");
                false
            }
        }
    }

    pub fn sync(&mut self, state: &NavigationState) {
        self.sort = state.sort_order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::test_support::controller;
    use crate::url::Traversal;
    use std::time::Instant;

    #[test]
    fn test_initial_value_from_url() {
        let nav = controller("#sort=za");
        assert_eq!(SortBinding::new(&nav).sort(), SortOrder::AcceleratorDesc);
        let nav = controller("#sort=bogus");
        assert_eq!(SortBinding::new(&nav).sort(), SortOrder::ReleaseNewest);
    }

    #[test]
    fn test_set_writes_once() {
        let mut nav = controller("");
        let mut sort = SortBinding::new(&nav);
        assert!(sort.set(&mut nav, SortOrder::ReleaseOldest));
        assert!(!sort.set(&mut nav, SortOrder::ReleaseOldest));
        assert!(!sort.set_key(&mut nav, "bogus"));
        assert_eq!(nav.history().len(), 2);
        assert!(sort.set_key(&mut nav, "accelerator"));
        assert_eq!(nav.fragment(), "sort=az");
    }

    #[test]
    fn test_sync_after_back() {
        let mut nav = controller("");
        let mut sort = SortBinding::new(&nav);
        sort.set(&mut nav, SortOrder::Accelerator);
        nav.traverse(Traversal::Back, Instant::now());
        sort.sync(nav.state());
        assert_eq!(sort.sort(), SortOrder::ReleaseNewest);
    }
}
