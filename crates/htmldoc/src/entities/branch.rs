//! Node layout of the packed decode trie and branch dispatch over one node.
//!
//! Each node starts with a header word:
//!
//! ```text
//!  15 14 | 13 ........ 7 | 6 ........ 0
//!  value |  branch count | jump offset / single branch char / inline value bits
//! ```
//!
//! The value length is 0 (no value), 1 (value stored in bits 0-13 of the header;
//! such a node has no branches), 2 (value in the next word) or 3 (value in the next
//! two words). Branch data follows the header and its value words, in one of three
//! shapes chosen by the encoder:
//!
//! - branch count 0, jump offset `c != 0`: a single branch on character `c`; the
//!   child node is encoded immediately after.
//! - branch count `n`, jump offset `base != 0`: a jump table of `n` words indexed by
//!   `char - base`, each holding `child + 1` (0 = no branch).
//! - branch count `n`, jump offset 0: `n` sorted key words followed by `n` child
//!   indices, searched by binary search.

pub const VALUE_LENGTH: u16 = 0b1100_0000_0000_0000;
pub const BRANCH_LENGTH: u16 = 0b0011_1111_1000_0000;
pub const JUMP_TABLE: u16 = 0b0000_0000_0111_1111;
/// Bits holding a value stored inline in the header (value length 1).
pub const INLINE_VALUE: u16 = !VALUE_LENGTH;

const VALUE_LENGTH_SHIFT: u32 = 14;
const BRANCH_LENGTH_SHIFT: u32 = 7;

#[inline]
pub fn value_length(node: u16) -> usize {
    usize::from((node & VALUE_LENGTH) >> VALUE_LENGTH_SHIFT)
}

#[inline]
pub fn branch_count(node: u16) -> usize {
    usize::from((node & BRANCH_LENGTH) >> BRANCH_LENGTH_SHIFT)
}

#[inline]
pub fn jump_offset(node: u16) -> u16 {
    node & JUMP_TABLE
}

/// Index of the first branch word of the node at `index`.
#[inline]
pub fn branch_start(index: usize, node: u16) -> usize {
    index + value_length(node).max(1)
}

/// Follow the branch of `node` labelled `ch`.
///
/// `start` is the index right after the node header and its value words (see
/// [`branch_start`]). Returns the index of the child node.
pub fn determine_branch(tree: &[u16], node: u16, start: usize, ch: u8) -> Option<usize> {
    if value_length(node) == 1 {
        return None;
    }
    let count = branch_count(node);
    let offset = jump_offset(node);
    let ch = u16::from(ch);

    if count == 0 {
        return (offset != 0 && ch == offset).then_some(start);
    }

    if offset != 0 {
        let slot = usize::from(ch.checked_sub(offset)?);
        if slot >= count {
            return None;
        }
        let target = *tree.get(start + slot)?;
        return usize::from(target).checked_sub(1);
    }

    let keys = tree.get(start..start + count)?;
    let slot = keys.binary_search(&ch).ok()?;
    tree.get(start + count + slot).map(|&target| usize::from(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::decode_tree::HTML_DECODE_TREE;

    fn walk(name: &str) -> Option<usize> {
        let tree = &HTML_DECODE_TREE[..];
        let mut index = 0;
        for b in name.bytes() {
            let node = tree[index];
            index = determine_branch(tree, node, branch_start(index, node), b)?;
        }
        Some(index)
    }

    #[test]
    fn field_masks_partition_the_word() {
        assert_eq!(VALUE_LENGTH | BRANCH_LENGTH | JUMP_TABLE, u16::MAX);
        assert_eq!(VALUE_LENGTH & BRANCH_LENGTH, 0);
        assert_eq!(BRANCH_LENGTH & JUMP_TABLE, 0);
    }

    #[test]
    fn accessors_decode_header_fields() {
        let node = (2 << 14) | (5 << 7) | 0x61;
        assert_eq!(value_length(node), 2);
        assert_eq!(branch_count(node), 5);
        assert_eq!(jump_offset(node), 0x61);
        assert_eq!(branch_start(10, node), 12);
        assert_eq!(branch_start(10, 0), 11);
    }

    #[test]
    fn single_branch_points_right_after_node() {
        // header with a single branch on 'q', child immediately after
        let tree = [u16::from(b'q'), 1 << 14 | 0x41];
        assert_eq!(determine_branch(&tree, tree[0], 1, b'q'), Some(1));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'r'), None);
    }

    #[test]
    fn jump_table_slots_store_target_plus_one() {
        // 3-slot table based at 'a': 'a' -> 5, 'b' -> none, 'c' -> 7
        let tree = [(3 << 7) | u16::from(b'a'), 6, 0, 8];
        assert_eq!(determine_branch(&tree, tree[0], 1, b'a'), Some(5));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'b'), None);
        assert_eq!(determine_branch(&tree, tree[0], 1, b'c'), Some(7));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'd'), None);
        assert_eq!(determine_branch(&tree, tree[0], 1, b'0'), None);
    }

    #[test]
    fn dictionary_is_binary_searched() {
        let tree = [
            3 << 7,
            u16::from(b'c'),
            u16::from(b'm'),
            u16::from(b'x'),
            40,
            50,
            60,
        ];
        assert_eq!(determine_branch(&tree, tree[0], 1, b'c'), Some(40));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'm'), Some(50));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'x'), Some(60));
        assert_eq!(determine_branch(&tree, tree[0], 1, b'd'), None);
    }

    #[test]
    fn inline_value_nodes_have_no_branches() {
        let node = (1 << 14) | 0x26;
        assert_eq!(determine_branch(&[node], node, 1, 0x26), None);
    }

    #[test]
    fn generated_tree_contains_common_names() {
        for name in ["amp;", "lt;", "gt;", "quot;", "nbsp;", "amp", "not"] {
            let index = walk(name).unwrap_or_else(|| panic!("missing trie path for {name}"));
            assert_ne!(
                value_length(HTML_DECODE_TREE[index]),
                0,
                "expected {name} to carry a value"
            );
        }
        assert!(walk("notanentity;").is_none());
        assert!(walk("nbs").is_some_and(|i| value_length(HTML_DECODE_TREE[i]) == 0));
    }
}
