//! Stack of open elements and mark groups.

use crate::types::Mark;

/// Entry in the open stack.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StackEntry {
    /// An element in the arena that receives content.
    Node(usize),
    /// Marks contributed by one tag converted into marks. Owns no content.
    MarkGroup(Vec<Mark>),
}

/// Open stack whose bottom entry is the document root and is never popped.
#[derive(Clone, Debug)]
pub(crate) struct OpenStack {
    items: Vec<StackEntry>,
    max_depth: u32,
}

impl OpenStack {
    pub(crate) fn new(root_index: usize) -> Self {
        Self {
            items: vec![StackEntry::Node(root_index)],
            max_depth: 1,
        }
    }

    pub(crate) fn push(&mut self, entry: StackEntry) {
        self.items.push(entry);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    /// Pop the top entry unless only the root is left.
    pub(crate) fn pop_above_root(&mut self) -> Option<StackEntry> {
        if self.items.len() > 1 {
            self.items.pop()
        } else {
            None
        }
    }

    /// Nearest entry that owns content, skipping mark groups. Falls back to the root.
    pub(crate) fn current_node(&self) -> usize {
        self.items
            .iter()
            .rev()
            .find_map(|entry| match entry {
                StackEntry::Node(index) => Some(*index),
                StackEntry::MarkGroup(_) => None,
            })
            .unwrap_or_else(|| unreachable!("open stack always keeps its root node"))
    }

    /// Open entries above the root.
    pub(crate) fn open_above_root(&self) -> usize {
        self.items.len() - 1
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_never_popped() {
        let mut stack = OpenStack::new(0);
        assert_eq!(stack.pop_above_root(), None);
        stack.push(StackEntry::Node(3));
        assert_eq!(stack.pop_above_root(), Some(StackEntry::Node(3)));
        assert_eq!(stack.pop_above_root(), None);
        assert_eq!(stack.current_node(), 0);
    }

    #[test]
    fn current_node_skips_mark_groups() {
        let mut stack = OpenStack::new(0);
        stack.push(StackEntry::Node(1));
        stack.push(StackEntry::MarkGroup(vec![Mark::new("bold")]));
        stack.push(StackEntry::MarkGroup(vec![Mark::new("italic")]));
        assert_eq!(stack.current_node(), 1);
        assert_eq!(stack.open_above_root(), 3);
        assert_eq!(stack.max_depth(), 4);
    }
}
