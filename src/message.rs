use catalog_nav::{SectionId, SortOrder, Traversal};

/// User intent collected while drawing a frame, applied after it.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavigateTo(SectionId),
    NavigateHome,
    Traverse(Traversal),
    OpenFragment(String),

    // Catalog controls
    SetSort(SortOrder),
    SetSearch(String),
    ToggleFilter {
        category: String,
        item: String,
        checked: bool,
    },
    ClearFilterCategory(String),
    ClearFilters,
}
