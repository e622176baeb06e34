use crate::controller::NavigationController;
use crate::state::NavigationState;
use crate::url::HistoryBackend;

#[derive(Clone, Debug)]
pub struct SearchBinding {
    query: String,
}

impl SearchBinding {
    pub fn new<H: HistoryBackend>(nav: &NavigationController<H>) -> Self {
        Self {
            query: nav.state().search_keyword.as_str().to_string(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>, query: &str) -> bool {
        self.query = query.to_string();
        nav.update_search(query)
    }

    pub fn clear<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>) -> bool {
        self.set(nav, "")
    }

    pub fn sync(&mut self, state: &NavigationState) {
        if self.query != state.search_keyword.as_str() {
            self.query = state.search_keyword.as_str().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::test_support::controller;
    use crate::url::Traversal;
    use std::time::Instant;

    #[test]
    fn test_search_round_trip_through_url() {
        let mut nav = controller("#keyword=vector%20search");
        let mut search = SearchBinding::new(&nav);
        assert_eq!(search.query(), "vector search");

        assert!(search.set(&mut nav, "rag"));
        assert_eq!(nav.fragment(), "keyword=rag");
        assert!(search.clear(&mut nav));
        assert_eq!(nav.fragment(), "");
        assert!(!search.clear(&mut nav));

        nav.traverse(Traversal::Back, Instant::now());
        search.sync(nav.state());
        assert_eq!(search.query(), "rag");
    }

    #[test]
    fn test_malformed_keyword_starts_empty() {
        let nav = controller("#keyword=%zz");
        assert_eq!(SearchBinding::new(&nav).query(), "");
    }
}
