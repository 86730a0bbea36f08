//! Wire model for the split tree returned by `/split/<word>`.
//!
//! The server answers with a recursive JSON document:
//!
//! ```text
//! {
//!   "word": "handschuh",
//!   "defns": ["glove"],
//!   "prefix": { "word": "hand", "defns": ["hand"] },
//!   "suffix": { "word": "schuh", "defns": ["shoe"] }
//! }
//! ```
//!
//! Every key is optional. Older servers sent a single newline-delimited
//! `defn` string instead of the `defns` array; both shapes decode into the
//! same [`SplitNode`].

use serde::Deserialize;

use crate::error::LookupError;

/// One node of a decomposition tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawNode")]
pub struct SplitNode {
    /// The sub-word at this node, if it is a dictionary word.
    pub word: Option<String>,
    /// Definitions for `word`, in server order.
    pub defns: Vec<String>,
    /// Left half of the split.
    pub prefix: Option<Box<SplitNode>>,
    /// Right half of the split.
    pub suffix: Option<Box<SplitNode>>,
}

/// Field-for-field image of the JSON object, before normalization.
#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    defns: Option<Vec<String>>,
    #[serde(default)]
    defn: Option<String>,
    #[serde(default)]
    prefix: Option<Box<SplitNode>>,
    #[serde(default)]
    suffix: Option<Box<SplitNode>>,
}

impl From<RawNode> for SplitNode {
    fn from(raw: RawNode) -> Self {
        let defns = match (raw.defns, raw.defn) {
            (Some(defns), _) => defns,
            (None, Some(text)) => split_legacy_defn(&text),
            (None, None) => Vec::new(),
        };

        Self {
            word: raw.word.filter(|w| !w.is_empty()),
            defns,
            prefix: raw.prefix,
            suffix: raw.suffix,
        }
    }
}

fn split_legacy_defn(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl SplitNode {
    /// Decode a response body into a tree.
    ///
    /// A bare `null` (the server found no split at all) is an empty node.
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        let node: Option<SplitNode> = serde_json::from_str(body)?;
        Ok(node.unwrap_or_default())
    }

    /// A leaf node carrying a word and its definitions.
    pub fn leaf(word: &str, defns: &[&str]) -> Self {
        Self {
            word: Some(word.to_string()),
            defns: defns.iter().map(|d| d.to_string()).collect(),
            prefix: None,
            suffix: None,
        }
    }

    /// Attach both halves of a split to this node.
    pub fn with_children(mut self, prefix: SplitNode, suffix: SplitNode) -> Self {
        self.prefix = Some(Box::new(prefix));
        self.suffix = Some(Box::new(suffix));
        self
    }

    /// True when the node carries neither a payload nor children.
    pub fn is_empty(&self) -> bool {
        self.word.is_none() && self.defns.is_empty() && !self.has_children()
    }

    /// True when at least one half of a split is present.
    pub fn has_children(&self) -> bool {
        self.prefix.is_some() || self.suffix.is_some()
    }

    /// Present children, prefix first.
    pub fn children(&self) -> impl Iterator<Item = &SplitNode> {
        self.prefix.iter().chain(self.suffix.iter()).map(|b| &**b)
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(SplitNode::node_count).sum::<usize>()
    }
}
