//! Block and mark toggling.
//!
//! These are the operations behind the toolbar buttons: query whether a
//! block type or mark is active at the selection, and flip it. Toggling a
//! list type lifts the selected blocks out of any list wrapper first, so
//! wrappers never nest and lists only ever contain list items.

use blogpen_core::{BlockType, Mark, Node};

use crate::editor::Editor;
use crate::selection::{Path, Selection};

/// True iff some node enclosing the selection has the given type
pub fn is_block_active(editor: &Editor, format: BlockType) -> bool {
    editor.selected_paths().into_iter().any(|path| {
        let leaf = editor.leaf_at(path).and_then(Node::block_type) == Some(format);
        let wrapper = path.item.is_some()
            && editor.document().get(path.block).and_then(Node::block_type) == Some(format);
        leaf || wrapper
    })
}

/// True iff the active mark set at the cursor has the given mark
pub fn is_mark_active(editor: &Editor, mark: Mark) -> bool {
    editor.active_marks().contains(mark)
}

/// Toggle the block type of the selected blocks.
///
/// Any list wrapper around the selection is unwrapped first, splitting the
/// wrapper so items outside the selection keep their own list. The selected
/// blocks then become paragraphs (when the format was already active), list
/// items (when toggling a list type on), or the format itself; toggling a
/// list type on additionally wraps the selected run in a new list element.
pub fn toggle_block(editor: &mut Editor, format: BlockType) {
    let Some(selection) = editor.selection() else {
        return;
    };
    let active = is_block_active(editor, format);
    let is_list = format.is_list();

    let start = selection.start();
    let end = selection.end();
    let document = editor.document_mut();
    if document.is_empty() || start.block >= document.len() {
        return;
    }
    let range_start = start.block;
    let range_end = end.block.min(document.len() - 1);

    let removed: Vec<Node> = document.drain(range_start..=range_end).collect();

    // Rebuild the removed range, lifting selected list items to the top
    // level. The selected leaves end up as one contiguous run.
    let mut segment: Vec<Node> = Vec::new();
    let mut run_start = 0;
    let mut run_len = 0;

    for (offset, block) in removed.into_iter().enumerate() {
        let index = range_start + offset;
        match block {
            Node::Element {
                block_type,
                children,
            } if block_type.is_list() => {
                let last = children.len().saturating_sub(1);
                let from = if index == start.block {
                    start.item.unwrap_or(0).min(last)
                } else {
                    0
                };
                let to = if index == end.block {
                    end.item.unwrap_or(last).min(last)
                } else {
                    last
                };

                let mut items = children.into_iter();
                let before: Vec<Node> = items.by_ref().take(from).collect();
                let selected: Vec<Node> = items.by_ref().take(to + 1 - from).collect();
                let after: Vec<Node> = items.collect();

                if !before.is_empty() {
                    segment.push(Node::element(block_type, before));
                }
                if run_len == 0 {
                    run_start = segment.len();
                }
                run_len += selected.len();
                segment.extend(selected);
                if !after.is_empty() {
                    segment.push(Node::element(block_type, after));
                }
            }
            other => {
                if run_len == 0 {
                    run_start = segment.len();
                }
                run_len += 1;
                segment.push(other);
            }
        }
    }

    let new_type = if active {
        BlockType::Paragraph
    } else if is_list {
        BlockType::ListItem
    } else {
        format
    };
    for node in &mut segment[run_start..run_start + run_len] {
        if let Node::Element { block_type, .. } = node {
            *block_type = new_type;
        }
    }

    let new_selection = if run_len == 0 {
        None
    } else if !active && is_list {
        let items: Vec<Node> = segment.drain(run_start..run_start + run_len).collect();
        segment.insert(run_start, Node::element(format, items));
        let block = range_start + run_start;
        Some(Selection::new(
            Path::item(block, 0),
            Path::item(block, run_len - 1),
        ))
    } else {
        let first = range_start + run_start;
        Some(Selection::new(
            Path::block(first),
            Path::block(first + run_len - 1),
        ))
    };

    document.splice(range_start..range_start, segment);

    if let Some(selection) = new_selection {
        editor.set_selection(selection);
    }
}

/// Toggle a mark in the active mark set.
///
/// The flipped set becomes the pending set at the cursor; when the
/// selection has extent, the new value is also applied to every text run
/// inside the selected blocks.
pub fn toggle_mark(editor: &mut Editor, mark: Mark) {
    let Some(selection) = editor.selection() else {
        return;
    };
    let mut marks = editor.active_marks();
    let value = !marks.contains(mark);
    marks.set(mark, value);

    let paths = editor.selected_paths();
    editor.set_pending_marks(marks);

    if !selection.is_collapsed() {
        for path in paths {
            if let Some(leaf) = editor.leaf_at_mut(path) {
                set_mark_in(leaf, mark, value);
            }
        }
    }
}

fn set_mark_in(node: &mut Node, mark: Mark, value: bool) {
    match node {
        Node::Text { marks, .. } => marks.set(mark, value),
        Node::Element { children, .. } => {
            for child in children {
                set_mark_in(child, mark, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogpen_core::Marks;

    fn paragraph(text: &str) -> Node {
        Node::element(BlockType::Paragraph, vec![Node::text(text)])
    }

    fn list_item(text: &str) -> Node {
        Node::element(BlockType::ListItem, vec![Node::text(text)])
    }

    #[test]
    fn test_toggle_heading_on_and_off() {
        let mut editor = Editor::with_document(vec![paragraph("Hi")]);

        toggle_block(&mut editor, BlockType::HeadingOne);
        assert_eq!(editor.document()[0].block_type(), Some(BlockType::HeadingOne));
        assert!(is_block_active(&editor, BlockType::HeadingOne));

        toggle_block(&mut editor, BlockType::HeadingOne);
        assert_eq!(editor.document()[0].block_type(), Some(BlockType::Paragraph));
        assert!(!is_block_active(&editor, BlockType::HeadingOne));
    }

    #[test]
    fn test_list_wrap_then_unwrap_restores_paragraph() {
        let mut editor = Editor::with_document(vec![paragraph("item")]);

        toggle_block(&mut editor, BlockType::BulletedList);
        assert_eq!(
            editor.document(),
            [Node::element(
                BlockType::BulletedList,
                vec![list_item("item")]
            )]
        );
        assert!(is_block_active(&editor, BlockType::BulletedList));

        toggle_block(&mut editor, BlockType::BulletedList);
        assert_eq!(editor.document(), [paragraph("item")]);
        assert!(!is_block_active(&editor, BlockType::BulletedList));
    }

    #[test]
    fn test_switching_list_kind() {
        let mut editor = Editor::with_document(vec![paragraph("item")]);

        toggle_block(&mut editor, BlockType::BulletedList);
        toggle_block(&mut editor, BlockType::NumberedList);
        assert_eq!(
            editor.document(),
            [Node::element(
                BlockType::NumberedList,
                vec![list_item("item")]
            )]
        );
    }

    #[test]
    fn test_unwrap_splits_around_middle_item() {
        let list = Node::element(
            BlockType::BulletedList,
            vec![list_item("a"), list_item("b"), list_item("c")],
        );
        let mut editor = Editor::with_document(vec![list]);
        editor.select(Selection::collapsed(Path::item(0, 1)));

        toggle_block(&mut editor, BlockType::BulletedList);

        assert_eq!(
            editor.document(),
            [
                Node::element(BlockType::BulletedList, vec![list_item("a")]),
                paragraph("b"),
                Node::element(BlockType::BulletedList, vec![list_item("c")]),
            ]
        );
        assert_eq!(editor.selection(), Some(Selection::collapsed(Path::block(1))));
    }

    #[test]
    fn test_multi_block_wrap_collects_one_list() {
        let mut editor = Editor::with_document(vec![paragraph("one"), paragraph("two")]);
        editor.select(Selection::new(Path::block(0), Path::block(1)));

        toggle_block(&mut editor, BlockType::NumberedList);

        assert_eq!(
            editor.document(),
            [Node::element(
                BlockType::NumberedList,
                vec![list_item("one"), list_item("two")]
            )]
        );
        assert_eq!(
            editor.selection(),
            Some(Selection::new(Path::item(0, 0), Path::item(0, 1)))
        );
    }

    #[test]
    fn test_block_quote_inside_list_selection() {
        let list = Node::element(
            BlockType::NumberedList,
            vec![list_item("a"), list_item("b")],
        );
        let mut editor = Editor::with_document(vec![list]);
        editor.select(Selection::new(Path::item(0, 0), Path::item(0, 1)));

        toggle_block(&mut editor, BlockType::BlockQuote);

        assert_eq!(
            editor.document(),
            [
                Node::element(BlockType::BlockQuote, vec![Node::text("a")]),
                Node::element(BlockType::BlockQuote, vec![Node::text("b")]),
            ]
        );
    }

    #[test]
    fn test_toggle_mark_is_idempotent_over_two_calls() {
        let mut editor = Editor::new();
        let before = editor.active_marks();

        toggle_mark(&mut editor, Mark::Bold);
        assert!(is_mark_active(&editor, Mark::Bold));

        toggle_mark(&mut editor, Mark::Bold);
        assert_eq!(editor.active_marks(), before);
    }

    #[test]
    fn test_toggle_mark_applies_to_selected_text() {
        let mut editor = Editor::with_document(vec![paragraph("one"), paragraph("two")]);
        editor.select(Selection::new(Path::block(0), Path::block(1)));

        toggle_mark(&mut editor, Mark::Italic);

        for block in editor.document() {
            assert_eq!(
                block.children(),
                [Node::marked_text(block.plain_text(), Marks::only(Mark::Italic))]
            );
        }

        toggle_mark(&mut editor, Mark::Italic);
        assert_eq!(editor.document()[0].children(), [Node::text("one")]);
    }

    #[test]
    fn test_no_selection_is_a_no_op() {
        let mut editor = Editor::with_document(vec![paragraph("x")]);
        let document = editor.document().to_vec();
        editor.deselect();

        toggle_block(&mut editor, BlockType::HeadingTwo);
        toggle_mark(&mut editor, Mark::Bold);

        assert_eq!(editor.document(), document);
        assert!(!is_block_active(&editor, BlockType::HeadingTwo));
        assert!(!is_mark_active(&editor, Mark::Bold));
    }
}
