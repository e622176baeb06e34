// Navigation state - the single canonical state mirrored into the URL
use super::{CurrentSection, FilterSelections, SearchKeyword, SortOrder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_section: CurrentSection,
    pub sort_order: SortOrder,
    pub search_keyword: SearchKeyword,
    pub filter_selections: FilterSelections,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: CurrentSection) -> Self {
        self.current_section = section;
        self
    }

    pub fn with_sort(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.search_keyword = SearchKeyword::new(keyword);
        self
    }

    pub fn with_filter(mut self, category: &str, value: &str) -> Self {
        self.filter_selections.insert(category, value);
        self
    }
}
