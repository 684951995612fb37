//! Open-list bookkeeping for the HTML renderer.
//!
//! List membership is a flat per-paragraph property (list id + nesting
//! level); the stack turns it into properly nested `<ul>`/`<ol>` markup.
//! Every marker on the stack has exactly one open `<li>`.

/// Tag of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListTag {
    /// Element name.
    pub fn name(self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
        }
    }
}

/// One open list level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    /// List id
    pub list_id: String,
    /// Nesting level
    pub level: u32,
    /// Tag the level was opened with
    pub tag: ListTag,
}

/// What a new list item does to the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStep {
    /// Markers closed, innermost first
    pub closed: Vec<ListMarker>,
    /// Marker opened for the item; `None` when the item continues the list
    /// already on top
    pub opened: Option<ListMarker>,
}

/// Stack of open lists.
#[derive(Debug, Default)]
pub struct ListStack {
    open: Vec<ListMarker>,
}

impl ListStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no list is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of open lists.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Innermost open list.
    pub fn top(&self) -> Option<&ListMarker> {
        self.open.last()
    }

    /// Advance to an item of `list_id` at `level`.
    ///
    /// Pops until the top is the same list at a lower or equal level, then
    /// pushes a new marker unless the top is exactly this list and level.
    pub fn step(&mut self, list_id: &str, level: u32, tag: ListTag) -> ListStep {
        let mut closed = Vec::new();
        while let Some(top) = self.open.last() {
            if top.list_id == list_id && top.level <= level {
                break;
            }
            if let Some(marker) = self.open.pop() {
                log::trace!("Closing list {} level {}", marker.list_id, marker.level);
                closed.push(marker);
            }
        }

        if self
            .open
            .last()
            .is_some_and(|top| top.list_id == list_id && top.level == level)
        {
            return ListStep {
                closed,
                opened: None,
            };
        }

        let marker = ListMarker {
            list_id: list_id.to_string(),
            level,
            tag,
        };
        log::trace!("Opening list {} level {}", list_id, level);
        self.open.push(marker.clone());
        ListStep {
            closed,
            opened: Some(marker),
        }
    }

    /// Close every open list, innermost first.
    pub fn close_all(&mut self) -> Vec<ListMarker> {
        if !self.open.is_empty() {
            log::trace!("Closing {} open list(s)", self.open.len());
        }
        let mut closed = std::mem::take(&mut self.open);
        closed.reverse();
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(markers: &[ListMarker]) -> Vec<u32> {
        markers.iter().map(|m| m.level).collect()
    }

    #[test]
    fn test_nested_then_plain() {
        let mut stack = ListStack::new();

        let first = stack.step("a", 0, ListTag::Unordered);
        assert!(first.closed.is_empty());
        assert_eq!(first.opened.as_ref().map(|m| m.level), Some(0));

        let second = stack.step("a", 0, ListTag::Unordered);
        assert!(second.closed.is_empty());
        assert!(second.opened.is_none());

        let third = stack.step("a", 1, ListTag::Unordered);
        assert!(third.closed.is_empty());
        assert_eq!(third.opened.as_ref().map(|m| m.level), Some(1));
        assert_eq!(stack.depth(), 2);

        let closed = stack.close_all();
        assert_eq!(levels(&closed), vec![1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_dedent_closes_inner_levels() {
        let mut stack = ListStack::new();
        stack.step("a", 0, ListTag::Ordered);
        stack.step("a", 1, ListTag::Ordered);
        stack.step("a", 2, ListTag::Ordered);

        let step = stack.step("a", 0, ListTag::Ordered);
        assert_eq!(levels(&step.closed), vec![2, 1]);
        assert!(step.opened.is_none());
        assert_eq!(stack.top().map(|m| m.level), Some(0));
    }

    #[test]
    fn test_other_list_replaces_stack() {
        let mut stack = ListStack::new();
        stack.step("a", 0, ListTag::Unordered);
        stack.step("a", 1, ListTag::Unordered);

        let step = stack.step("b", 0, ListTag::Ordered);
        assert_eq!(levels(&step.closed), vec![1, 0]);
        assert_eq!(
            step.opened,
            Some(ListMarker {
                list_id: "b".to_string(),
                level: 0,
                tag: ListTag::Ordered,
            })
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_level_jump_opens_one_marker() {
        let mut stack = ListStack::new();
        stack.step("a", 0, ListTag::Unordered);
        let step = stack.step("a", 2, ListTag::Unordered);
        assert!(step.closed.is_empty());
        assert_eq!(step.opened.map(|m| m.level), Some(2));

        let back = stack.step("a", 1, ListTag::Unordered);
        assert_eq!(levels(&back.closed), vec![2]);
        assert_eq!(back.opened.map(|m| m.level), Some(1));
    }
}
