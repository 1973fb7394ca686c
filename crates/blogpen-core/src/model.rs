//! Rich-text document model
//!
//! This module defines the node tree for blog-post documents. A document is
//! an ordered sequence of element nodes whose leaves are text runs carrying
//! boolean style marks. The same tree is the input for both rendering and
//! HTML serialization.

use serde::{Deserialize, Serialize};

/// The type tag of an element node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Paragraph,
    HeadingOne,
    HeadingTwo,
    BlockQuote,
    NumberedList,
    BulletedList,
    ListItem,
}

impl BlockType {
    /// The kebab-case name used in the JSON document shape
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::HeadingOne => "heading-one",
            BlockType::HeadingTwo => "heading-two",
            BlockType::BlockQuote => "block-quote",
            BlockType::NumberedList => "numbered-list",
            BlockType::BulletedList => "bulleted-list",
            BlockType::ListItem => "list-item",
        }
    }

    /// Parse a type name, falling back to `Paragraph` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name {
            "heading-one" => BlockType::HeadingOne,
            "heading-two" => BlockType::HeadingTwo,
            "block-quote" => BlockType::BlockQuote,
            "numbered-list" => BlockType::NumberedList,
            "bulleted-list" => BlockType::BulletedList,
            "list-item" => BlockType::ListItem,
            _ => BlockType::Paragraph,
        }
    }

    /// Check if this is one of the two list wrapper types
    pub fn is_list(&self) -> bool {
        matches!(self, BlockType::NumberedList | BlockType::BulletedList)
    }
}

// Deserialization goes through `from_name` so documents carrying type names
// this model does not know still load, as paragraphs.
impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(BlockType::from_name(&name))
    }
}

/// A boolean style mark on a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The set of marks on a text run. Absent flags mean false in the JSON
/// shape, so unset marks are omitted when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Marks {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
}

impl Marks {
    pub fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Code => self.code,
        }
    }

    pub fn set(&mut self, mark: Mark, value: bool) {
        match mark {
            Mark::Bold => self.bold = value,
            Mark::Italic => self.italic = value,
            Mark::Underline => self.underline = value,
            Mark::Code => self.code = value,
        }
    }

    /// A set with a single mark enabled
    pub fn only(mark: Mark) -> Self {
        let mut marks = Marks::default();
        marks.set(mark, true);
        marks
    }

    pub fn is_empty(&self) -> bool {
        *self == Marks::default()
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Structural node wrapping child nodes
    Element {
        #[serde(rename = "type")]
        block_type: BlockType,
        children: Vec<Node>,
    },

    /// Leaf text run with style marks
    Text {
        text: String,
        #[serde(flatten)]
        marks: Marks,
    },
}

impl Node {
    /// Create an element node
    pub fn element(block_type: BlockType, children: Vec<Node>) -> Self {
        Node::Element {
            block_type,
            children,
        }
    }

    /// Create a plain text run
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            text: content.into(),
            marks: Marks::default(),
        }
    }

    /// Create a text run with marks
    pub fn marked_text(content: impl Into<String>, marks: Marks) -> Self {
        Node::Text {
            text: content.into(),
            marks,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// The type tag of an element node
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            Node::Element { block_type, .. } => Some(*block_type),
            Node::Text { .. } => None,
        }
    }

    /// Child nodes; empty for text runs
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &mut [],
        }
    }

    /// All text content of this node and its descendants
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text { text, .. } => text.clone(),
            Node::Element { children, .. } => {
                children.iter().map(|child| child.plain_text()).collect()
            }
        }
    }
}

/// The document an editor starts with: one paragraph holding an empty run
pub fn initial_document() -> Vec<Node> {
    vec![Node::element(BlockType::Paragraph, vec![Node::text("")])]
}
