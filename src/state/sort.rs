// Sort options for the catalog listing

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Title A to Z
    Accelerator,
    /// Title Z to A
    AcceleratorDesc,
    #[default]
    ReleaseNewest,
    ReleaseOldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::ReleaseNewest,
        SortOrder::ReleaseOldest,
        SortOrder::Accelerator,
        SortOrder::AcceleratorDesc,
    ];

    /// Short token stored in the `sort` fragment parameter.
    pub fn url_token(self) -> &'static str {
        match self {
            SortOrder::Accelerator => "az",
            SortOrder::AcceleratorDesc => "za",
            SortOrder::ReleaseNewest => "newest",
            SortOrder::ReleaseOldest => "oldest",
        }
    }

    pub fn from_url_token(token: &str) -> Option<Self> {
        match token {
            "az" => Some(SortOrder::Accelerator),
            "za" => Some(SortOrder::AcceleratorDesc),
            "newest" => Some(SortOrder::ReleaseNewest),
            "oldest" => Some(SortOrder::ReleaseOldest),
            _ => None,
        }
    }

    /// Name used by the sort picker and the config file.
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Accelerator => "accelerator",
            SortOrder::AcceleratorDesc => "acceleratorDesc",
            SortOrder::ReleaseNewest => "releaseNewest",
            SortOrder::ReleaseOldest => "releaseOldest",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Accelerator => "Name (A-Z)",
            SortOrder::AcceleratorDesc => "Name (Z-A)",
            SortOrder::ReleaseNewest => "Newest",
            SortOrder::ReleaseOldest => "Oldest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_and_reversible() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_url_token(order.url_token()), Some(order));
            assert_eq!(SortOrder::from_key(order.key()), Some(order));
        }
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(SortOrder::from_url_token("bogus"), None);
        assert_eq!(SortOrder::from_key("newest"), None);
        assert_eq!(SortOrder::default(), SortOrder::ReleaseNewest);
    }
}
