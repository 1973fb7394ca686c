//! # blogpen-editor
//!
//! Editor state and toggle logic for blogpen.
//!
//! An [`Editor`] owns one editing session's document, a block-granular
//! [`Selection`], and the pending mark set at the cursor. The toggle
//! operations in [`commands`] are what toolbar buttons call; the
//! [`HOTKEYS`] table maps keyboard shortcuts onto the same mark toggles.
//!
//! ## Example
//!
//! ```rust
//! use blogpen_core::{serialize_document, BlockType, SerializeOptions};
//! use blogpen_editor::{commands, Editor};
//!
//! let mut editor = Editor::new();
//! editor.insert_text("First post");
//! commands::toggle_block(&mut editor, BlockType::HeadingOne);
//!
//! let html = serialize_document(editor.document(), &SerializeOptions::default());
//! assert_eq!(html, "<h1>First post</h1>");
//! ```

pub mod commands;
mod editor;
mod hotkeys;
mod selection;

pub use commands::{is_block_active, is_mark_active, toggle_block, toggle_mark};
pub use editor::Editor;
pub use hotkeys::{mark_for_event, KeyEvent, HOTKEYS};
pub use selection::{Path, Selection};
