use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::dom_tree::{Document, Node};

/// Index for fast DOM lookup by element id.
#[derive(Debug, Default)]
pub struct DomIndices {
    /// Maps an element's "id" attribute to the first node (in tree order) carrying it.
    pub id_map: HashMap<String, Rc<RefCell<Node>>>,
}

impl DomIndices {
    /// Build the index for the entire document.
    pub fn build(document: &Document) -> Self {
        let mut indices = DomIndices::default();
        Self::traverse(&document.root, &mut indices);
        indices
    }

    /// Recursively traverse the DOM tree and populate the index.
    fn traverse(node: &Rc<RefCell<Node>>, indices: &mut DomIndices) {
        match &*node.borrow() {
            Node::DocumentRoot(root) => {
                for child in &root.children {
                    Self::traverse(child, indices);
                }
            }
            Node::Element(elem) => {
                // Duplicate ids resolve to the earliest element, like getElementById.
                if let Some(id_value) = elem.attr("id") {
                    indices
                        .id_map
                        .entry(id_value.to_string())
                        .or_insert_with(|| Rc::clone(node));
                }
                for child in &elem.children {
                    Self::traverse(child, indices);
                }
            }
            Node::Text(_) | Node::Comment(_) => {
                // Only elements are indexed.
            }
        }
    }
}
