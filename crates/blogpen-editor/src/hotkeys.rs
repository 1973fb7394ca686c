//! Keyboard shortcuts for mark toggling.
//!
//! `mod` is the platform-conventional command/control modifier; the table
//! is fixed and ordered the way the toolbar lists the marks.

use blogpen_core::Mark;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// The fixed shortcut table, `mod+key` to the mark it toggles
pub static HOTKEYS: Lazy<IndexMap<&'static str, Mark>> = Lazy::new(|| {
    IndexMap::from([
        ("mod+b", Mark::Bold),
        ("mod+i", Mark::Italic),
        ("mod+u", Mark::Underline),
        ("mod+`", Mark::Code),
    ])
});

/// A key press as reported by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The character key, lowercase
    pub key: char,
    /// Whether the command/control modifier was held
    pub modifier: bool,
}

impl KeyEvent {
    pub fn new(key: char, modifier: bool) -> Self {
        Self { key, modifier }
    }
}

/// Look up the mark a key press should toggle, if any
pub fn mark_for_event(event: &KeyEvent) -> Option<Mark> {
    if !event.modifier {
        return None;
    }
    let name = format!("mod+{}", event.key);
    HOTKEYS.get(name.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_marks() {
        let cases = [
            ('b', Mark::Bold),
            ('i', Mark::Italic),
            ('u', Mark::Underline),
            ('`', Mark::Code),
        ];
        for (key, mark) in cases {
            assert_eq!(mark_for_event(&KeyEvent::new(key, true)), Some(mark));
        }
    }

    #[test]
    fn test_requires_modifier() {
        assert_eq!(mark_for_event(&KeyEvent::new('b', false)), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(mark_for_event(&KeyEvent::new('x', true)), None);
    }
}
