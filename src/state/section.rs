// Section state - which logical region of the page is active
use std::fmt;

/// Logical section name as used in URLs and the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// `Home` means "above every registered section" and is the only value
/// standing for "no section".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurrentSection {
    #[default]
    Home,
    Active(SectionId),
}

impl CurrentSection {
    pub fn active(id: impl Into<String>) -> Self {
        CurrentSection::Active(SectionId::new(id))
    }

    pub fn is_home(&self) -> bool {
        matches!(self, CurrentSection::Home)
    }

    pub fn section(&self) -> Option<&SectionId> {
        match self {
            CurrentSection::Home => None,
            CurrentSection::Active(id) => Some(id),
        }
    }
}

impl fmt::Display for CurrentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentSection::Home => f.write_str("home"),
            CurrentSection::Active(id) => id.fmt(f),
        }
    }
}
