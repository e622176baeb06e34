// History backend - the address bar and its back/forward stack

/// Direction of a browser-style history traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Back,
    Forward,
}

/// Seam over the platform history (`pushState`/`replaceState` and the
/// back/forward buttons). Fragments are stored without the leading `#`.
pub trait HistoryBackend {
    fn current(&self) -> &str;

    /// Adds a new entry after the current one.
    fn push(&mut self, fragment: String);

    /// Overwrites the current entry in place.
    fn replace(&mut self, fragment: String);

    fn back(&mut self) -> bool;

    fn forward(&mut self) -> bool;

    fn traverse(&mut self, direction: Traversal) -> bool {
        match direction {
            Traversal::Back => self.back(),
            Traversal::Forward => self.forward(),
        }
    }
}

/// In-memory history used by the desktop host and in tests.
#[derive(Clone, Debug)]
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let initial = initial.strip_prefix('#').map(str::to_string).unwrap_or(initial);
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl HistoryBackend for SessionHistory {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, fragment: String) {
        // Remove any forward history when navigating to a new entry
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment);
        self.index += 1;
    }

    fn replace(&mut self, fragment: String) {
        self.entries[self.index] = fragment;
    }

    fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    fn forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.index += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = SessionHistory::new("#section=featured");
        assert_eq!(history.current(), "section=featured");
        history.push("sort=az".into());
        history.push("sort=za".into());
        assert!(history.back());
        history.push("keyword=x".into());
        assert_eq!(history.entries(), ["section=featured", "sort=az", "keyword=x"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_traversal_bounds() {
        let mut history = SessionHistory::default();
        assert!(!history.traverse(Traversal::Back));
        history.push("sort=az".into());
        assert!(history.traverse(Traversal::Back));
        assert_eq!(history.current(), "");
        assert!(history.traverse(Traversal::Forward));
        assert!(!history.traverse(Traversal::Forward));
        assert_eq!(history.current(), "sort=az");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = SessionHistory::default();
        history.replace("section=featured".into());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), "section=featured");
    }
}
