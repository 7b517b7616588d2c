//! Selected agents, in the order they were ticked

/// Ordered set of selected agent ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change. Returns `true` if membership changed.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        if checked {
            if self.contains(id) {
                return false;
            }
            self.ids.push(id.to_string());
            true
        } else {
            self.remove(id)
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_and_off() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("agent-video", true));
        assert!(!selection.toggle("agent-video", true));
        assert_eq!(selection.len(), 1);

        assert!(selection.toggle("agent-video", false));
        assert!(selection.is_empty());
        assert!(!selection.toggle("agent-video", false));
    }

    #[test]
    fn test_keeps_selection_order() {
        let mut selection = SelectionSet::new();
        selection.toggle("b", true);
        selection.toggle("a", true);
        selection.toggle("c", true);
        selection.remove("a");

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
