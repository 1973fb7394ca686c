//! Block-granular selection over the document tree.
//!
//! A path addresses a leaf block: either a top-level block, or an item
//! inside a top-level list wrapper. The document nests at most one level
//! (lists contain only list items), so two indices are enough.

/// Address of a leaf block in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    /// Index of the top-level block
    pub block: usize,
    /// Index of the item inside a list wrapper, if the block is a list
    pub item: Option<usize>,
}

impl Path {
    pub fn new(block: usize, item: Option<usize>) -> Self {
        Self { block, item }
    }

    /// Address of a top-level block
    pub fn block(block: usize) -> Self {
        Self { block, item: None }
    }

    /// Address of an item inside a top-level list
    pub fn item(block: usize, item: usize) -> Self {
        Self {
            block,
            item: Some(item),
        }
    }
}

/// The blocks the cursor currently touches. Anchor and focus are unordered,
/// as in any editor where the user can select backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Path,
    pub focus: Path,
}

impl Selection {
    pub fn new(anchor: Path, focus: Path) -> Self {
        Self { anchor, focus }
    }

    /// A cursor without extent
    pub fn collapsed(path: Path) -> Self {
        Self {
            anchor: path,
            focus: path,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// The earlier of anchor and focus
    pub fn start(&self) -> Path {
        self.anchor.min(self.focus)
    }

    /// The later of anchor and focus
    pub fn end(&self) -> Path {
        self.anchor.max(self.focus)
    }
}
