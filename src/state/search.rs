// Search keyword state
use std::fmt;

/// Free-text search keyword. Any string is valid, including the empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchKeyword(String);

impl SearchKeyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchKeyword {
    fn from(keyword: &str) -> Self {
        Self::new(keyword)
    }
}
