// Catalog data consumed by the navigation layer: filter options and ordering
use crate::state::{NavigationState, SortOrder};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: String,
    pub excerpt: String,
    /// ISO-8601 date (`YYYY-MM-DD`); compares correctly as a string.
    pub release_date: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl CatalogItem {
    pub fn new(title: &str, release_date: &str) -> Self {
        Self {
            title: title.to_string(),
            excerpt: String::new(),
            release_date: release_date.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = excerpt.to_string();
        self
    }

    pub fn with_field(mut self, field: &str, values: &[&str]) -> Self {
        self.fields.insert(
            field.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Normalised checkbox id of a filter value: lowercase, whitespace runs
/// collapsed to `_`.
pub fn item_id(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Distinct values of each filterable field, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    categories: Vec<(String, Vec<String>)>,
}

impl FilterOptions {
    pub fn from_items(items: &[CatalogItem], filterable_fields: &[&str]) -> Self {
        let mut categories = Vec::new();
        for &field in filterable_fields {
            let mut values: Vec<String> = Vec::new();
            for value in items.iter().flat_map(|item| item.field(field)) {
                let value = value.trim();
                if !value.is_empty() && !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
            if values.is_empty() {
                log::debug!("Filter category '{field}' has no values in the catalog");
            } else {
                categories.push((field.to_string(), values));
            }
        }
        Self { categories }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(c, _)| c.as_str())
    }

    pub fn values(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Maps a checkbox id back to the catalog value it was derived from.
    pub fn resolve_item(&self, category: &str, item: &str) -> Option<&str> {
        self.values(category)
            .iter()
            .find(|value| item_id(value) == item)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CatalogItem {
    /// Case-insensitive substring match against every text field.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let query = keyword.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&query);
        hit(&self.title)
            || hit(&self.excerpt)
            || hit(&self.release_date)
            || self.fields.values().flatten().any(|v| hit(v.as_str()))
    }

    /// Within a category any selected value matches; every category with a
    /// selection must match.
    pub fn matches_filters(&self, state: &NavigationState) -> bool {
        state.filter_selections.iter().all(|(category, selected)| {
            let values: Vec<String> = self.field(category).iter().map(|v| item_id(v)).collect();
            selected.iter().any(|s| values.contains(&item_id(s)))
        })
    }
}

/// Items passing the state's keyword and filters, in its sort order.
pub fn visible_items<'a>(items: &'a [CatalogItem], state: &NavigationState) -> Vec<&'a CatalogItem> {
    let mut visible: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| item.matches_filters(state) && item.matches_keyword(state.search_keyword.as_str()))
        .collect();
    visible.sort_by(|a, b| compare(a, b, state.sort_order));
    visible
}

fn compare(a: &CatalogItem, b: &CatalogItem, order: SortOrder) -> Ordering {
    let by_title = || a.title.to_lowercase().cmp(&b.title.to_lowercase());
    match order {
        SortOrder::Accelerator => by_title(),
        SortOrder::AcceleratorDesc => by_title().reverse(),
        SortOrder::ReleaseNewest => b.release_date.cmp(&a.release_date),
        SortOrder::ReleaseOldest => a.release_date.cmp(&b.release_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("chat copilot", "2024-03-01")
                .with_field("industries", &["Retail", "Health Care"])
                .with_field("programmingLanguages", &["Python"]),
            CatalogItem::new("Agent Hub", "2025-01-15")
                .with_field("industries", &["Retail", " "])
                .with_field("programmingLanguages", &["C#", "Python"]),
            CatalogItem::new("Doc Intelligence", "2023-11-30"),
        ]
    }

    #[test]
    fn test_item_id() {
        assert_eq!(item_id("Health Care"), "health_care");
        assert_eq!(item_id("  Azure   AI  Search "), "azure_ai_search");
    }

    #[test]
    fn test_filter_options_are_distinct_in_first_seen_order() {
        let options = FilterOptions::from_items(
            &items(),
            &["productsAndServices", "industries", "programmingLanguages"],
        );
        assert_eq!(options.categories().collect::<Vec<_>>(), vec!["industries", "programmingLanguages"]);
        assert_eq!(options.values("industries"), ["Retail", "Health Care"]);
        assert_eq!(options.values("programmingLanguages"), ["Python", "C#"]);
        assert!(options.values("productsAndServices").is_empty());
        assert_eq!(options.resolve_item("industries", "health_care"), Some("Health Care"));
        assert_eq!(options.resolve_item("programmingLanguages", "health_care"), None);
    }

    #[test]
    fn test_sort_orders() {
        let items = items();
        let titles = |order| {
            let state = NavigationState::default().with_sort(order);
            visible_items(&items, &state)
                .into_iter()
                .map(|i| i.title.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(SortOrder::Accelerator), ["Agent Hub", "chat copilot", "Doc Intelligence"]);
        assert_eq!(titles(SortOrder::AcceleratorDesc), ["Doc Intelligence", "chat copilot", "Agent Hub"]);
        assert_eq!(titles(SortOrder::ReleaseNewest), ["Agent Hub", "chat copilot", "Doc Intelligence"]);
        assert_eq!(titles(SortOrder::ReleaseOldest), ["Doc Intelligence", "chat copilot", "Agent Hub"]);
    }

    #[test]
    fn test_visible_items_filters_searches_and_sorts() {
        let items = items();
        let state = NavigationState::default()
            .with_filter("industries", "Retail")
            .with_sort(SortOrder::Accelerator);
        let titles = |state: &NavigationState| {
            visible_items(&items, state)
                .into_iter()
                .map(|i| i.title.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(&state), ["Agent Hub", "chat copilot"]);

        let state = state.with_filter("programmingLanguages", "C#");
        assert_eq!(titles(&state), ["Agent Hub"]);

        let state = NavigationState::default().with_keyword("health");
        assert_eq!(titles(&state), ["chat copilot"]);
        assert_eq!(titles(&NavigationState::default()).len(), 3);
    }
}
