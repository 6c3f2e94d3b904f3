//! Writes the DOM tree back out as HTML text.

use crate::dom::dom_tree;
use std::cell::RefCell;
use std::rc::Rc;

/// A list of void (self-closing) elements in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "meta", "img", "br", "hr", "input", "link", "area", "base", "col", "embed", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Serializes the whole document, DOCTYPE included.
pub fn to_html(document: &dom_tree::Document) -> String {
    let mut output = String::new();
    if let Some(doctype) = &*document.doctype.borrow() {
        write_doctype(doctype, &mut output);
    }
    write_node(&document.root, false, &mut output);
    output
}

/// Serializes `node` and its subtree.
pub fn node_to_html(node: &Rc<RefCell<dom_tree::Node>>) -> String {
    let mut output = String::new();
    write_node(node, false, &mut output);
    output
}

/// Public and system identifiers decide the page's quirks mode, so both are kept.
fn write_doctype(doctype: &dom_tree::Doctype, output: &mut String) {
    output.push_str("<!DOCTYPE ");
    output.push_str(&doctype.name);
    if !doctype.public_id.is_empty() {
        output.push_str(&format!(" PUBLIC \"{}\"", doctype.public_id));
        if !doctype.system_id.is_empty() {
            output.push_str(&format!(" \"{}\"", doctype.system_id));
        }
    } else if !doctype.system_id.is_empty() {
        output.push_str(&format!(" SYSTEM \"{}\"", doctype.system_id));
    }
    output.push('>');
}

fn write_node(node: &Rc<RefCell<dom_tree::Node>>, raw_text: bool, output: &mut String) {
    match &*node.borrow() {
        dom_tree::Node::DocumentRoot(root) => {
            for child in &root.children {
                write_node(child, false, output);
            }
        }
        dom_tree::Node::Element(elem) => {
            output.push('<');
            output.push_str(&elem.tag);
            for (key, value) in &elem.attributes {
                output.push(' ');
                output.push_str(key);
                output.push_str("=\"");
                output.push_str(&escape(value, true));
                output.push('"');
            }
            output.push('>');

            if VOID_ELEMENTS.contains(&elem.tag.as_str()) {
                return;
            }

            let raw = RAW_TEXT_ELEMENTS.contains(&elem.tag.as_str());
            for child in &elem.children {
                write_node(child, raw, output);
            }
            output.push_str("</");
            output.push_str(&elem.tag);
            output.push('>');
        }
        dom_tree::Node::Text(text) => {
            if raw_text {
                output.push_str(text);
            } else {
                output.push_str(&escape(text, false));
            }
        }
        dom_tree::Node::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '<' if !attribute => escaped.push_str("&lt;"),
            '>' if !attribute => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
