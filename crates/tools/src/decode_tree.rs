//! Packs the WHATWG named character reference list into the `u16` trie read by
//! `htmldoc::entities`.
//!
//! Node header word:
//!
//! - bits 14-15: value length (0 none, 1 inline in bits 0-13, 2 one trailing
//!   word, 3 two trailing words for a surrogate pair)
//! - bits 7-13: branch count, or jump table length
//! - bits 0-6: the single branch character, or the jump table base character
//!
//! A jump table stores `target + 1` per slot so that 0 means "no branch". A
//! dictionary stores the sorted branch characters followed by the targets.
//! Identical subtrees are shared.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

pub const FORMAT_VERSION: u32 = 1;

const VALUE_LENGTH_SHIFT: u16 = 14;
const BRANCH_LENGTH_SHIFT: u16 = 7;
const MAX_BRANCHES: usize = 0x7f;
/// A jump table is used while it has at most this many slots per real branch.
const MAX_JUMP_TABLE_OVERHEAD: usize = 2;

#[derive(Debug)]
pub enum GenError {
    Json(serde_json::Error),
    /// Key without the leading `&`, or with non-ASCII characters.
    BadName(String),
    /// Empty or out-of-range code point list.
    BadValue(String),
    /// A legacy name (no `;`) whose terminated form is missing from the list.
    MissingTerminated(String),
    /// The table outgrew the 16-bit word layout.
    Overflow(&'static str),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Json(err) => write!(f, "invalid entity list: {err}"),
            GenError::BadName(name) => write!(f, "unusable entity name {name:?}"),
            GenError::BadValue(name) => write!(f, "unusable code points for {name:?}"),
            GenError::MissingTerminated(name) => {
                write!(f, "legacy entity {name:?} has no ';' form")
            }
            GenError::Overflow(what) => write!(f, "{what} does not fit the table layout"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Json(err)
    }
}

#[derive(Deserialize)]
struct EntityEntry {
    codepoints: Vec<u32>,
}

/// Reads `entities.json` into `name -> replacement`, names without the `&`.
pub fn parse_entities(json: &str) -> Result<BTreeMap<String, String>, GenError> {
    let raw: BTreeMap<String, EntityEntry> = serde_json::from_str(json)?;
    let mut entities = BTreeMap::new();
    for (key, entry) in raw {
        let name = match key.strip_prefix('&') {
            Some(name) if !name.is_empty() && name.is_ascii() => name.to_string(),
            _ => return Err(GenError::BadName(key)),
        };
        let value: Option<String> = entry.codepoints.iter().map(|&cp| char::from_u32(cp)).collect();
        match value {
            Some(value) if !value.is_empty() => entities.insert(name, value),
            _ => return Err(GenError::BadValue(key)),
        };
    }
    Ok(entities)
}

/// Full source of `decode_tree.rs` for the given `entities.json` text.
pub fn generate(json: &str) -> Result<String, GenError> {
    let entities = parse_entities(json)?;
    Ok(render(&encode_entities(&entities)?))
}

#[derive(Debug, Default)]
struct TrieNode {
    value: Option<String>,
    next: BTreeMap<u8, usize>,
}

/// Encodes `name -> replacement` (names without `&`) into trie words.
pub fn encode_entities(entities: &BTreeMap<String, String>) -> Result<Vec<u16>, GenError> {
    let mut nodes = build_trie(entities)?;
    let root = merge_duplicates(&mut nodes, 0);
    let mut encoder = Encoder {
        nodes: &nodes,
        words: Vec::new(),
        cache: HashMap::new(),
    };
    encoder.encode_node(root)?;
    Ok(encoder.words)
}

/// Every terminated name gets a `;` leaf. A legacy name also carries its value
/// on the node before the `;`.
fn build_trie(entities: &BTreeMap<String, String>) -> Result<Vec<TrieNode>, GenError> {
    if let Some(name) = entities
        .keys()
        .find(|name| !name.ends_with(';') && !entities.contains_key(&format!("{name};")))
    {
        return Err(GenError::MissingTerminated(name.clone()));
    }

    let mut nodes = vec![TrieNode::default()];
    for (name, value) in entities {
        let Some(stem) = name.strip_suffix(';') else {
            continue;
        };
        let mut current = 0;
        for byte in stem.bytes() {
            current = match nodes[current].next.get(&byte) {
                Some(&child) => child,
                None => {
                    nodes.push(TrieNode::default());
                    let child = nodes.len() - 1;
                    nodes[current].next.insert(byte, child);
                    child
                }
            };
        }
        if entities.contains_key(stem) {
            nodes[current].value = Some(value.clone());
        }
        nodes.push(TrieNode {
            value: Some(value.clone()),
            next: BTreeMap::new(),
        });
        let leaf = nodes.len() - 1;
        nodes[current].next.insert(b';', leaf);
    }
    Ok(nodes)
}

type Shape = (Option<String>, Vec<(u8, usize)>);

/// Points every edge at one canonical node per distinct subtree; returns the
/// canonical root.
fn merge_duplicates(nodes: &mut [TrieNode], root: usize) -> usize {
    fn visit(nodes: &mut [TrieNode], index: usize, canonical: &mut HashMap<Shape, usize>) -> usize {
        let children: Vec<(u8, usize)> = nodes[index].next.iter().map(|(&b, &i)| (b, i)).collect();
        let merged: Vec<(u8, usize)> = children
            .into_iter()
            .map(|(byte, child)| (byte, visit(nodes, child, canonical)))
            .collect();
        nodes[index].next = merged.iter().copied().collect();
        let shape = (nodes[index].value.clone(), merged);
        *canonical.entry(shape).or_insert(index)
    }

    let mut canonical = HashMap::new();
    visit(nodes, root, &mut canonical)
}

struct Encoder<'a> {
    nodes: &'a [TrieNode],
    words: Vec<u16>,
    /// Trie node index to the word index of its header.
    cache: HashMap<usize, usize>,
}

impl Encoder<'_> {
    fn encode_node(&mut self, index: usize) -> Result<usize, GenError> {
        if let Some(&start) = self.cache.get(&index) {
            return Ok(start);
        }
        let start = self.words.len();
        self.cache.insert(index, start);
        self.words.push(0);

        let nodes = self.nodes;
        let node = &nodes[index];
        if let Some(value) = &node.value {
            let units: Vec<u16> = value.encode_utf16().collect();
            match units[..] {
                [unit] if node.next.is_empty() && unit < 1 << VALUE_LENGTH_SHIFT => {
                    self.words[start] |= (1 << VALUE_LENGTH_SHIFT) | unit;
                }
                _ => {
                    let value_len = units.len() + 1;
                    if value_len > 3 {
                        return Err(GenError::Overflow("value length"));
                    }
                    self.words[start] |= to_word(value_len)? << VALUE_LENGTH_SHIFT;
                    self.words.extend_from_slice(&units);
                }
            }
        }
        if !node.next.is_empty() {
            self.add_branches(&node.next, start)?;
        }
        Ok(start)
    }

    fn add_branches(&mut self, next: &BTreeMap<u8, usize>, header: usize) -> Result<(), GenError> {
        let branches: Vec<(u8, usize)> = next.iter().map(|(&b, &i)| (b, i)).collect();
        if branches.len() > MAX_BRANCHES {
            return Err(GenError::Overflow("branch count"));
        }

        if let [(byte, child)] = branches[..]
            && !self.cache.contains_key(&child)
        {
            self.words[header] |= u16::from(byte);
            self.encode_node(child)?;
            return Ok(());
        }

        let table = self.words.len();
        let (Some(&(first, _)), Some(&(last, _))) = (branches.first(), branches.last()) else {
            return Ok(());
        };
        let jump_len = usize::from(last - first) + 1;

        if jump_len <= MAX_JUMP_TABLE_OVERHEAD * branches.len() {
            if jump_len > MAX_BRANCHES {
                return Err(GenError::Overflow("jump table length"));
            }
            self.words[header] |= (to_word(jump_len)? << BRANCH_LENGTH_SHIFT) | u16::from(first);
            self.words.resize(table + jump_len, 0);
            for (byte, child) in branches {
                let target = self.encode_node(child)?;
                self.words[table + usize::from(byte - first)] = to_word(target + 1)?;
            }
        } else {
            let count = branches.len();
            self.words[header] |= to_word(count)? << BRANCH_LENGTH_SHIFT;
            self.words.extend(branches.iter().map(|&(byte, _)| u16::from(byte)));
            self.words.resize(table + 2 * count, u16::MAX);
            for (slot, (_, child)) in branches.into_iter().enumerate() {
                let target = self.encode_node(child)?;
                self.words[table + count + slot] = to_word(target)?;
            }
        }
        Ok(())
    }
}

fn to_word(n: usize) -> Result<u16, GenError> {
    u16::try_from(n).map_err(|_| GenError::Overflow("word index"))
}

const WORDS_PER_ROW: usize = 12;

/// Renders the words as the `decode_tree.rs` module.
pub fn render(words: &[u16]) -> String {
    let mut out = String::new();
    out.push_str("// Generated by `cargo run -p tools --bin gen_decode_tree` from the WHATWG\n");
    out.push_str("// named character reference list (entities.json). Do not edit by hand.\n\n");
    out.push_str("/// Format revision of [`HTML_DECODE_TREE`].\n");
    out.push_str(&format!("pub const DECODE_TREE_VERSION: u32 = {FORMAT_VERSION};\n\n"));
    out.push_str("/// Packed trie over every HTML named character reference.\n");
    out.push_str(&format!("pub static HTML_DECODE_TREE: [u16; {}] = [\n", words.len()));
    for row in words.chunks(WORDS_PER_ROW) {
        let row: Vec<String> = row.iter().map(|w| format!("0x{w:04x}")).collect();
        out.push_str(&format!("    {},\n", row.join(", ")));
    }
    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn single_chain_inlines_branches_and_value() {
        let words = encode_entities(&entities(&[("lt;", "<")])).unwrap();
        assert_eq!(words, [0x006c, 0x0074, 0x003b, 0x403c]);
    }

    #[test]
    fn legacy_name_keeps_value_in_trailing_word() {
        let words = encode_entities(&entities(&[("lt", "<"), ("lt;", "<")])).unwrap();
        assert_eq!(words, [0x006c, 0x0074, 0x803b, 0x003c, 0x403c]);
    }

    #[test]
    fn shared_subtrees_use_one_jump_table_target() {
        let words = encode_entities(&entities(&[("a;", "x"), ("b;", "x")])).unwrap();
        assert_eq!(words, [0x0161, 0x0004, 0x0004, 0x003b, 0x4078]);
    }

    #[test]
    fn sparse_branches_use_a_dictionary() {
        let words = encode_entities(&entities(&[("a;", "x"), ("z;", "y")])).unwrap();
        assert_eq!(
            words,
            [0x0100, 0x0061, 0x007a, 0x0005, 0x0007, 0x003b, 0x4078, 0x003b, 0x4079]
        );
    }

    #[test]
    fn astral_value_takes_two_trailing_words() {
        let words = encode_entities(&entities(&[("fr;", "\u{1D523}")])).unwrap();
        assert_eq!(words, [0x0066, 0x0072, 0x003b, 0xc000, 0xd835, 0xdd23]);
    }

    #[test]
    fn legacy_name_without_terminated_form_is_rejected() {
        let err = encode_entities(&entities(&[("amp", "&")])).unwrap_err();
        assert!(matches!(err, GenError::MissingTerminated(name) if name == "amp"));
    }

    #[test]
    fn parses_whatwg_json_shape() {
        let json = r#"{
            "&amp;": { "codepoints": [38], "characters": "&" },
            "&amp": { "codepoints": [38], "characters": "&" },
            "&NotEqualTilde;": { "codepoints": [8770, 824], "characters": "≂̸" }
        }"#;
        let parsed = parse_entities(json).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["amp"], "&");
        assert_eq!(parsed["NotEqualTilde;"], "\u{2242}\u{338}");

        assert!(matches!(
            parse_entities(r#"{ "amp;": { "codepoints": [38] } }"#),
            Err(GenError::BadName(_))
        ));
        assert!(matches!(
            parse_entities(r#"{ "&x;": { "codepoints": [55296] } }"#),
            Err(GenError::BadValue(_))
        ));
    }

    #[test]
    fn render_wraps_rows_of_twelve() {
        let source = render(&[1; 13]);
        assert!(source.starts_with("// Generated by `cargo run -p tools --bin gen_decode_tree`"));
        assert!(source.contains("pub const DECODE_TREE_VERSION: u32 = 1;\n"));
        assert!(source.contains("pub static HTML_DECODE_TREE: [u16; 13] = [\n"));
        assert!(source.ends_with("    0x0001,\n];\n"));
        assert_eq!(source.matches("0x0001").count(), 13);
    }
}
