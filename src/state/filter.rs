// Filter state - selected values per catalog category
use std::collections::{BTreeMap, BTreeSet};

/// Selected filter values keyed by category. A category is present only
/// while it holds at least one value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelections {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value; blank values are ignored. Returns true if it changed.
    pub fn insert(&mut self, category: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn remove(&mut self, category: &str, value: &str) -> bool {
        let Some(values) = self.categories.get_mut(category) else {
            return false;
        };
        let removed = values.remove(value.trim());
        if values.is_empty() {
            self.categories.remove(category);
        }
        removed
    }

    /// Removes every value of `category` the predicate accepts.
    pub fn remove_matching(&mut self, category: &str, mut matches: impl FnMut(&str) -> bool) -> bool {
        let Some(values) = self.categories.get_mut(category) else {
            return false;
        };
        let before = values.len();
        values.retain(|value| !matches(value));
        let removed = values.len() != before;
        if values.is_empty() {
            self.categories.remove(category);
        }
        removed
    }

    /// Replaces the whole value set of a category.
    pub fn set_category<I, S>(&mut self, category: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: BTreeSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            self.categories.remove(category);
        } else {
            self.categories.insert(category.to_string(), values);
        }
    }

    pub fn clear_category(&mut self, category: &str) -> bool {
        self.categories.remove(category).is_some()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|values| values.contains(value))
    }

    pub fn values(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Drops every category the predicate rejects.
    pub fn retain_categories(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.categories.retain(|category, _| keep(category));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_is_dropped() {
        let mut filters = FilterSelections::new();
        assert!(filters.insert("industries", "Retail"));
        assert!(filters.remove("industries", "Retail"));
        assert!(filters.is_empty());
        assert_eq!(filters.values("industries"), None);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut filters = FilterSelections::new();
        assert!(!filters.insert("industries", "   "));
        filters.set_category("languages", ["", " Rust ", "Go"]);
        assert!(filters.contains("languages", "Rust"));
        assert_eq!(filters.values("languages").map(|v| v.len()), Some(2));
        filters.set_category("languages", [" "]);
        assert!(filters.is_empty());
    }

    #[test]
    fn test_remove_matching() {
        let mut filters = FilterSelections::new();
        filters.insert("industries", "health care");
        filters.insert("industries", "Retail");
        assert!(filters.remove_matching("industries", |v| v.eq_ignore_ascii_case("HEALTH CARE")));
        assert!(!filters.remove_matching("industries", |v| v == "Mining"));
        assert!(filters.remove_matching("industries", |_| true));
        assert!(filters.is_empty());
        assert!(!filters.remove_matching("languages", |_| true));
    }

    #[test]
    fn test_retain_categories() {
        let mut filters = FilterSelections::new();
        filters.insert("industries", "Retail");
        filters.insert("colors", "Blue");
        filters.retain_categories(|c| c == "industries");
        assert_eq!(filters.categories().collect::<Vec<_>>(), vec!["industries"]);
    }
}
