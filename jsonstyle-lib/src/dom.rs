use html5ever::QualName;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod dom_tree {
    use super::*;
    use crate::parser::dom_indices::DomIndices;

    #[derive(Debug, Clone)]
    pub enum Node {
        DocumentRoot(DocumentRootNode),
        Element(ElementNode),
        Text(String),
        Comment(String),
    }

    #[derive(Debug, Clone)]
    pub struct DocumentRootNode {
        pub children: Vec<Rc<RefCell<Node>>>,
    }

    #[derive(Debug, Clone)]
    pub struct ElementNode {
        pub tag: String,
        pub qual_name: QualName,
        pub attributes: Vec<(String, String)>,
        pub children: Vec<Rc<RefCell<Node>>>,
        /// Back pointer set when the element is attached to a parent.
        pub parent: Option<Weak<RefCell<Node>>>,
    }

    #[derive(Debug)]
    pub struct Document {
        pub root: Rc<RefCell<Node>>,
        pub doctype: RefCell<Option<Doctype>>,
    }

    #[derive(Debug)]
    pub struct Doctype {
        pub name: String,
        pub public_id: String,
        pub system_id: String,
    }

    impl DocumentRootNode {
        pub fn new() -> Self {
            DocumentRootNode {
                children: Vec::new(),
            }
        }
    }

    impl Default for DocumentRootNode {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ElementNode {
        pub fn new(tag: String, qual_name: QualName) -> Self {
            ElementNode {
                tag,
                qual_name,
                attributes: Vec::new(),
                children: Vec::new(),
                parent: None,
            }
        }

        /// Value of the first attribute called `name`, if present.
        pub fn attr(&self, name: &str) -> Option<&str> {
            self.attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl Node {
        pub fn children(&self) -> Option<&Vec<Rc<RefCell<Node>>>> {
            match self {
                Node::DocumentRoot(root) => Some(&root.children),
                Node::Element(elem) => Some(&elem.children),
                Node::Text(_) | Node::Comment(_) => None,
            }
        }

        pub fn children_mut(&mut self) -> Option<&mut Vec<Rc<RefCell<Node>>>> {
            match self {
                Node::DocumentRoot(root) => Some(&mut root.children),
                Node::Element(elem) => Some(&mut elem.children),
                Node::Text(_) | Node::Comment(_) => None,
            }
        }

        pub fn as_element(&self) -> Option<&ElementNode> {
            match self {
                Node::Element(elem) => Some(elem),
                _ => None,
            }
        }
    }

    impl Document {
        /// First element in tree order whose `id` attribute equals `id`.
        pub fn get_element_by_id(&self, id: &str) -> Option<Rc<RefCell<Node>>> {
            DomIndices::build(self).id_map.remove(id)
        }
    }

    pub fn new_document() -> Document {
        Document {
            root: Rc::new(RefCell::new(Node::DocumentRoot(DocumentRootNode::new()))),
            doctype: RefCell::new(None),
        }
    }

    /// Replaces every child of `node` with a single text node holding `text`.
    ///
    /// Returns `false` (and leaves the node alone) when `node` cannot hold
    /// children.
    pub fn set_text_content(node: &Rc<RefCell<Node>>, text: &str) -> bool {
        let mut node_borrow = node.borrow_mut();
        match node_borrow.children_mut() {
            Some(children) => {
                children.clear();
                if !text.is_empty() {
                    children.push(Rc::new(RefCell::new(Node::Text(text.to_string()))));
                }
                true
            }
            None => false,
        }
    }

    /// Concatenated text of `node` and all of its descendants.
    pub fn text_content(node: &Rc<RefCell<Node>>) -> String {
        let mut output = String::new();
        collect_text(node, &mut output);
        output
    }

    fn collect_text(node: &Rc<RefCell<Node>>, output: &mut String) {
        match &*node.borrow() {
            Node::Text(text) => output.push_str(text),
            Node::Comment(_) => {}
            other => {
                if let Some(children) = other.children() {
                    for child in children {
                        collect_text(child, output);
                    }
                }
            }
        }
    }
}
