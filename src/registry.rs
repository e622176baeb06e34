// Section registry - logical section ids <-> scroll anchor ids
use crate::state::SectionId;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub anchor_id: String,
}

impl SectionDescriptor {
    pub fn new(id: &str, anchor_id: &str) -> Self {
        Self {
            id: SectionId::new(id),
            anchor_id: anchor_id.to_string(),
        }
    }
}

/// Immutable bidirectional mapping, kept in declaration (page) order.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    descriptors: Vec<SectionDescriptor>,
    by_section: HashMap<SectionId, usize>,
    by_anchor: HashMap<String, usize>,
}

impl SectionRegistry {
    pub fn new(descriptors: impl IntoIterator<Item = SectionDescriptor>) -> Self {
        let mut registry = Self::default();
        for descriptor in descriptors {
            if registry.by_section.contains_key(&descriptor.id)
                || registry.by_anchor.contains_key(&descriptor.anchor_id)
            {
                log::warn!(
                    "Ignoring duplicate section '{}' (anchor '{}')",
                    descriptor.id,
                    descriptor.anchor_id
                );
                continue;
            }
            let index = registry.descriptors.len();
            registry.by_section.insert(descriptor.id.clone(), index);
            registry.by_anchor.insert(descriptor.anchor_id.clone(), index);
            registry.descriptors.push(descriptor);
        }
        registry
    }

    pub fn anchor_for(&self, section: &SectionId) -> Option<&str> {
        self.by_section
            .get(section)
            .map(|&i| self.descriptors[i].anchor_id.as_str())
    }

    pub fn section_for(&self, anchor_id: &str) -> Option<&SectionId> {
        self.by_anchor.get(anchor_id).map(|&i| &self.descriptors[i].id)
    }

    pub fn contains(&self, section: &SectionId) -> bool {
        self.by_section.contains_key(section)
    }

    /// Looks up a registered id from its string form.
    pub fn lookup(&self, id: &str) -> Option<&SectionId> {
        self.descriptors.iter().map(|d| &d.id).find(|s| s.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.descriptors.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.descriptors.iter().map(|d| &d.id)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new([
            SectionDescriptor::new("featured", "featured"),
            SectionDescriptor::new("success-stories", "customer-trust"),
        ])
    }

    #[test]
    fn test_bidirectional_lookup() {
        let registry = registry();
        let stories = SectionId::new("success-stories");
        assert_eq!(registry.anchor_for(&stories), Some("customer-trust"));
        assert_eq!(registry.section_for("customer-trust"), Some(&stories));
        assert_eq!(registry.section_for("success-stories"), None);
    }

    #[test]
    fn test_unknown_section() {
        let registry = registry();
        assert_eq!(registry.anchor_for(&SectionId::new("pricing")), None);
        assert!(registry.lookup("pricing").is_none());
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let registry = SectionRegistry::new([
            SectionDescriptor::new("featured", "featured"),
            SectionDescriptor::new("featured", "other"),
            SectionDescriptor::new("again", "featured"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.anchor_for(&SectionId::new("featured")), Some("featured"));
    }
}
