use crate::catalog::{item_id, FilterOptions};
use crate::controller::NavigationController;
use crate::state::NavigationState;
use crate::url::HistoryBackend;
use std::collections::BTreeSet;

/// Checkbox state of the filter sidebar. Items are identified per category
/// by their normalised id (see [`item_id`]).
#[derive(Clone, Debug)]
pub struct FilterBinding {
    options: FilterOptions,
    selected: BTreeSet<(String, String)>,
}

impl FilterBinding {
    pub fn new<H: HistoryBackend>(nav: &NavigationController<H>, options: FilterOptions) -> Self {
        let mut binding = Self {
            options,
            selected: BTreeSet::new(),
        };
        binding.sync(nav.state());
        binding
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn is_selected(&self, category: &str, item: &str) -> bool {
        self.selected
            .iter()
            .any(|(c, i)| c == category && i == item)
    }

    pub fn selected_items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().map(|(c, i)| (c.as_str(), i.as_str()))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle<H: HistoryBackend>(
        &mut self,
        nav: &mut NavigationController<H>,
        category: &str,
        item: &str,
        checked: bool,
    ) -> bool {
        let Some(value) = self.options.resolve_item(category, item) else {
            log::debug!("Unknown filter item '{item}' in '{category}'");
            return false;
        };
        let changed = nav.toggle_filter_value(category, value, checked);
        self.sync(nav.state());
        changed
    }

    pub fn clear<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>) -> bool {
        let changed = nav.clear_filters();
        self.sync(nav.state());
        changed
    }

    pub fn clear_category<H: HistoryBackend>(&mut self, nav: &mut NavigationController<H>, category: &str) -> bool {
        let changed = nav.clear_filter_category(category);
        self.sync(nav.state());
        changed
    }

    pub fn sync(&mut self, state: &NavigationState) {
        self.selected = state
            .filter_selections
            .iter()
            .flat_map(|(category, values)| {
                values
                    .iter()
                    .map(move |value| (category.to_string(), item_id(value)))
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::test_support::controller;
    use crate::catalog::CatalogItem;
    use crate::url::Traversal;
    use std::time::Instant;

    fn options() -> FilterOptions {
        let items = [
            CatalogItem::new("a", "2024-01-01")
                .with_field("industries", &["Health Care", "Retail"])
                .with_field("programmingLanguages", &["Python"]),
        ];
        FilterOptions::from_items(&items, &["industries", "programmingLanguages"])
    }

    #[test]
    fn test_initial_selection_from_url() {
        let nav = controller("#industries=Health%20Care&languages=Python");
        let filters = FilterBinding::new(&nav, options());
        assert!(filters.is_selected("industries", "health_care"));
        assert!(filters.is_selected("programmingLanguages", "python"));
        assert!(!filters.is_selected("industries", "python"));
        assert_eq!(filters.selected_count(), 2);
    }

    #[test]
    fn test_uncheck_deep_linked_value_with_other_spelling() {
        let mut nav = controller("#industries=health%20care");
        let mut filters = FilterBinding::new(&nav, options());
        assert!(filters.is_selected("industries", "health_care"));

        assert!(filters.toggle(&mut nav, "industries", "health_care", false));
        assert!(!filters.is_selected("industries", "health_care"));
        assert_eq!(filters.selected_count(), 0);
        assert_eq!(nav.fragment(), "");
    }

    #[test]
    fn test_toggle_resolves_catalog_value() {
        let mut nav = controller("");
        let mut filters = FilterBinding::new(&nav, options());
        assert!(filters.toggle(&mut nav, "industries", "health_care", true));
        assert_eq!(nav.fragment(), "industries=Health%20Care");
        assert!(!filters.toggle(&mut nav, "industries", "mining", true));
        assert!(filters.toggle(&mut nav, "programmingLanguages", "python", true));
        assert!(filters.toggle(&mut nav, "industries", "health_care", false));
        assert_eq!(
            filters.selected_items().collect::<Vec<_>>(),
            vec![("programmingLanguages", "python")]
        );
    }

    #[test]
    fn test_clear_and_back() {
        let mut nav = controller("");
        let mut filters = FilterBinding::new(&nav, options());
        filters.toggle(&mut nav, "industries", "retail", true);
        filters.toggle(&mut nav, "programmingLanguages", "python", true);
        assert!(filters.clear_category(&mut nav, "industries"));
        assert_eq!(nav.fragment(), "languages=Python");
        assert!(filters.clear(&mut nav));
        assert_eq!(filters.selected_count(), 0);

        nav.traverse(Traversal::Back, Instant::now());
        filters.sync(nav.state());
        assert!(filters.is_selected("programmingLanguages", "python"));
        assert!(!filters.is_selected("industries", "retail"));
    }
}
