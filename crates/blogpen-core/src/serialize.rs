//! Document tree to HTML serialization
//!
//! Converts document nodes into an HTML string. Serialization is a pure
//! tree walk: the same tree always produces the same bytes.

use crate::model::{BlockType, Marks, Node};
use crate::options::SerializeOptions;

impl BlockType {
    /// The HTML tag an element of this type serializes to.
    ///
    /// The match is exhaustive on purpose: a new block type must not
    /// compile until its tag is chosen here.
    pub fn html_tag(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "p",
            BlockType::HeadingOne => "h1",
            BlockType::HeadingTwo => "h2",
            BlockType::BlockQuote => "blockquote",
            BlockType::NumberedList => "ol",
            BlockType::BulletedList => "ul",
            BlockType::ListItem => "li",
        }
    }
}

/// Serialize a single node to an HTML string
pub fn serialize(node: &Node, options: &SerializeOptions) -> String {
    let mut output = String::with_capacity(256);
    serialize_node(node, options, &mut output);
    output
}

/// Serialize a document (the top-level node sequence) to the full HTML body
pub fn serialize_document(nodes: &[Node], options: &SerializeOptions) -> String {
    let mut output = String::with_capacity(1024);
    for node in nodes {
        serialize_node(node, options, &mut output);
    }
    output
}

fn serialize_node(node: &Node, options: &SerializeOptions, out: &mut String) {
    match node {
        Node::Element {
            block_type,
            children,
        } => {
            let tag = block_type.html_tag();
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                serialize_node(child, options, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        Node::Text { text, marks } => serialize_text(text, marks, options, out),
    }
}

// Wrap order is fixed, innermost to outermost: code, em, u, strong.
fn serialize_text(text: &str, marks: &Marks, options: &SerializeOptions, out: &mut String) {
    if marks.bold {
        out.push_str("<strong>");
    }
    if marks.underline {
        out.push_str("<u>");
    }
    if marks.italic {
        out.push_str("<em>");
    }
    if marks.code {
        out.push_str("<code>");
    }

    if options.escape_text {
        escape_into(text, out);
    } else {
        out.push_str(text);
    }

    if marks.code {
        out.push_str("</code>");
    }
    if marks.italic {
        out.push_str("</em>");
    }
    if marks.underline {
        out.push_str("</u>");
    }
    if marks.bold {
        out.push_str("</strong>");
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
