//! The editor value: document, selection, and pending cursor marks.

use blogpen_core::{initial_document, Marks, Node};

use crate::selection::{Path, Selection};

/// Owns one editing session's document and selection state.
///
/// The pending mark set mirrors how the cursor behaves in rich-text
/// editors: toggling a mark with a collapsed cursor does not change any
/// text, it changes what subsequently typed text will carry. Moving the
/// selection drops the pending set.
#[derive(Debug, Clone)]
pub struct Editor {
    document: Vec<Node>,
    selection: Option<Selection>,
    pending_marks: Option<Marks>,
}

impl Editor {
    /// Create an editor holding the initial empty document
    pub fn new() -> Self {
        Self::with_document(initial_document())
    }

    /// Create an editor over an existing document, cursor at the first block
    pub fn with_document(document: Vec<Node>) -> Self {
        Self {
            document,
            selection: Some(Selection::collapsed(Path::block(0))),
            pending_marks: None,
        }
    }

    pub fn document(&self) -> &[Node] {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Vec<Node> {
        &mut self.document
    }

    /// Replace the document wholesale and reset cursor state
    pub fn set_document(&mut self, document: Vec<Node>) {
        self.document = document;
        self.selection = Some(Selection::collapsed(Path::block(0)));
        self.pending_marks = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Move the selection. Drops any pending marks.
    pub fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
        self.pending_marks = None;
    }

    pub fn deselect(&mut self) {
        self.selection = None;
        self.pending_marks = None;
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.into();
    }

    pub(crate) fn set_pending_marks(&mut self, marks: Marks) {
        self.pending_marks = Some(marks);
    }

    /// The active mark set at the cursor: the pending set if one exists,
    /// otherwise the marks of the first text run under the selection start.
    pub fn active_marks(&self) -> Marks {
        if let Some(marks) = self.pending_marks {
            return marks;
        }
        self.selection
            .and_then(|selection| self.leaf_at(selection.start()))
            .and_then(first_text_marks)
            .unwrap_or_default()
    }

    /// The leaf block a path addresses, if it exists
    pub fn leaf_at(&self, path: Path) -> Option<&Node> {
        let block = self.document.get(path.block)?;
        match path.item {
            Some(item) => block.children().get(item),
            None => Some(block),
        }
    }

    pub(crate) fn leaf_at_mut(&mut self, path: Path) -> Option<&mut Node> {
        let block = self.document.get_mut(path.block)?;
        match path.item {
            Some(item) => block.children_mut().get_mut(item),
            None => Some(block),
        }
    }

    /// The leaf paths covered by the current selection, in document order
    pub fn selected_paths(&self) -> Vec<Path> {
        let Some(selection) = self.selection else {
            return Vec::new();
        };
        let start = selection.start();
        let end = selection.end();
        let mut paths = Vec::new();

        for block in start.block..=end.block {
            let Some(node) = self.document.get(block) else {
                break;
            };
            let is_list = node.block_type().is_some_and(|t| t.is_list());
            if !is_list {
                paths.push(Path::block(block));
                continue;
            }

            let last = node.children().len().saturating_sub(1);
            let from = if block == start.block {
                start.item.unwrap_or(0)
            } else {
                0
            };
            let to = if block == end.block {
                end.item.unwrap_or(last)
            } else {
                last
            };
            for item in from..=to.min(last) {
                paths.push(Path::item(block, item));
            }
        }

        paths
    }

    /// Insert text at the end of the leaf under the selection end, carrying
    /// the active marks
    pub fn insert_text(&mut self, text: &str) {
        let Some(selection) = self.selection else {
            return;
        };
        let marks = self.active_marks();
        let Some(leaf) = self.leaf_at_mut(selection.end()) else {
            return;
        };
        let Node::Element { children, .. } = leaf else {
            return;
        };

        match children.last_mut() {
            Some(Node::Text {
                text: run,
                marks: run_marks,
            }) if *run_marks == marks || run.is_empty() => {
                *run_marks = marks;
                run.push_str(text);
            }
            _ => children.push(Node::marked_text(text, marks)),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn first_text_marks(node: &Node) -> Option<Marks> {
    match node {
        Node::Text { marks, .. } => Some(*marks),
        Node::Element { children, .. } => children.iter().find_map(first_text_marks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogpen_core::{BlockType, Mark};

    #[test]
    fn test_new_editor_has_initial_document() {
        let editor = Editor::new();
        assert_eq!(editor.document(), initial_document());
        assert_eq!(
            editor.selection(),
            Some(Selection::collapsed(Path::block(0)))
        );
    }

    #[test]
    fn test_active_marks_read_from_text_run() {
        let document = vec![Node::element(
            BlockType::Paragraph,
            vec![Node::marked_text("x", Marks::only(Mark::Italic))],
        )];
        let editor = Editor::with_document(document);
        assert_eq!(editor.active_marks(), Marks::only(Mark::Italic));
    }

    #[test]
    fn test_pending_marks_override_text_run() {
        let mut editor = Editor::new();
        editor.set_pending_marks(Marks::only(Mark::Bold));
        assert_eq!(editor.active_marks(), Marks::only(Mark::Bold));

        // Moving the cursor drops the pending set.
        editor.select(Selection::collapsed(Path::block(0)));
        assert_eq!(editor.active_marks(), Marks::default());
    }

    #[test]
    fn test_selected_paths_expands_list_items() {
        let document = vec![
            Node::element(BlockType::Paragraph, vec![Node::text("a")]),
            Node::element(
                BlockType::BulletedList,
                vec![
                    Node::element(BlockType::ListItem, vec![Node::text("b")]),
                    Node::element(BlockType::ListItem, vec![Node::text("c")]),
                ],
            ),
        ];
        let mut editor = Editor::with_document(document);
        editor.select(Selection::new(Path::block(0), Path::item(1, 1)));

        assert_eq!(
            editor.selected_paths(),
            vec![Path::block(0), Path::item(1, 0), Path::item(1, 1)]
        );
    }

    #[test]
    fn test_insert_text_carries_active_marks() {
        let mut editor = Editor::new();
        editor.set_pending_marks(Marks::only(Mark::Code));
        editor.insert_text("let x;");

        let expected = Node::element(
            BlockType::Paragraph,
            vec![Node::marked_text("let x;", Marks::only(Mark::Code))],
        );
        assert_eq!(editor.document(), [expected]);
    }

    #[test]
    fn test_insert_text_appends_to_matching_run() {
        let mut editor = Editor::new();
        editor.insert_text("Hello");
        editor.insert_text(" World");

        assert_eq!(editor.document()[0].plain_text(), "Hello World");
        assert_eq!(editor.document()[0].children().len(), 1);
    }
}
