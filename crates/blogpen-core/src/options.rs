//! Configuration options for HTML serialization

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Escape `&`, `<`, `>` and `"` in text runs.
    ///
    /// Off by default: the output is then byte-compatible with documents
    /// published by earlier versions, at the cost of allowing markup typed
    /// into the editor to pass through verbatim.
    pub escape_text: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable text escaping
    pub fn escaped() -> Self {
        Self { escape_text: true }
    }
}
