//! Parses an HTML page into the owned DOM tree defined in `crate::dom::dom_tree`.
//!
//! html5ever does the tokenizing and tree construction; `PageTreeSink` turns its
//! callbacks into `Rc<RefCell<Node>>` links.

use crate::dom::dom_tree;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{
    interface::{ElemName, ElementFlags, NodeOrText, QuirksMode, TreeSink},
    Attribute, LocalName, Namespace, QualName,
};
use log::warn;
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

type NodeHandle = Rc<RefCell<dom_tree::Node>>;

/// Creates a DOM tree from the provided HTML content.
///
/// # Arguments
///
/// * `html_content` - A string slice containing the HTML to parse.
///
/// # Returns
///
/// A `dom_tree::Document` representing the parsed HTML.
pub fn create_dom_tree(html_content: &str) -> dom_tree::Document {
    let tree_sink = PageTreeSink::new();
    html5ever::parse_document(tree_sink, Default::default()).one(html_content.to_string())
}

/// A TreeSink building the page DOM.
///
/// It holds the Document being built and the quirks mode reported by the parser.
pub struct PageTreeSink {
    document: dom_tree::Document,
    quirks_mode: RefCell<QuirksMode>,
}

impl PageTreeSink {
    /// Creates a new `PageTreeSink` with an empty document.
    pub fn new() -> Self {
        Self {
            document: dom_tree::new_document(),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    /// Quirks mode the parser settled on.
    pub fn quirks_mode(&self) -> QuirksMode {
        *self.quirks_mode.borrow()
    }
}

impl Default for PageTreeSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Element name handed back to html5ever.
#[derive(Debug)]
pub struct PageElemName {
    ns: Namespace,
    local: LocalName,
}

impl ElemName for PageElemName {
    fn local_name(&self) -> &LocalName {
        &self.local
    }

    fn ns(&self) -> &Namespace {
        &self.ns
    }
}

fn into_node(child: NodeOrText<NodeHandle>) -> NodeHandle {
    match child {
        NodeOrText::AppendNode(node) => node,
        NodeOrText::AppendText(text) => {
            Rc::new(RefCell::new(dom_tree::Node::Text(text.to_string())))
        }
    }
}

fn set_parent(child: &NodeHandle, parent: Option<&NodeHandle>) {
    if let dom_tree::Node::Element(ref mut elem) = *child.borrow_mut() {
        elem.parent = parent.map(Rc::downgrade);
    }
}

fn parent_of(node: &NodeHandle) -> Option<NodeHandle> {
    match &*node.borrow() {
        dom_tree::Node::Element(elem) => elem.parent.as_ref().and_then(|weak| weak.upgrade()),
        _ => None,
    }
}

/// Appends `text` onto an existing text node, returning `false` when `node` is not text.
fn merge_text(node: &NodeHandle, text: &str) -> bool {
    match *node.borrow_mut() {
        dom_tree::Node::Text(ref mut existing) => {
            existing.push_str(text);
            true
        }
        _ => false,
    }
}

impl TreeSink for PageTreeSink {
    type Handle = NodeHandle;
    type Output = dom_tree::Document;
    type ElemName<'a>
        = PageElemName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self.document
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        warn!("HTML parse error: {}", msg);
    }

    fn get_document(&self) -> Self::Handle {
        self.document.root.clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        match &*target.borrow() {
            dom_tree::Node::Element(elem) => PageElemName {
                ns: elem.qual_name.ns.clone(),
                local: elem.qual_name.local.clone(),
            },
            _ => panic!("elem_name called on non-element node"),
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let mut element_node = dom_tree::ElementNode::new(name.local.to_string(), name);
        element_node.attributes = attrs
            .into_iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();
        Rc::new(RefCell::new(dom_tree::Node::Element(element_node)))
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        Rc::new(RefCell::new(dom_tree::Node::Comment(text.to_string())))
    }

    /// Processing instructions only occur in XML; kept as a comment.
    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle {
        let combined = format!("?{} {}", target, data);
        Rc::new(RefCell::new(dom_tree::Node::Comment(combined)))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        if let NodeOrText::AppendText(ref text) = child {
            let last = parent
                .borrow()
                .children()
                .and_then(|children| children.last().cloned());
            if let Some(last) = last {
                if merge_text(&last, text) {
                    return;
                }
            }
        }

        let child_node = into_node(child);
        set_parent(&child_node, Some(parent));
        if let Some(children) = parent.borrow_mut().children_mut() {
            children.push(child_node);
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        if parent_of(element).is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        *self.document.doctype.borrow_mut() = Some(dom_tree::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        });
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let Some(parent) = parent_of(sibling) else {
            return;
        };
        let index = parent.borrow().children().and_then(|children| {
            children
                .iter()
                .position(|candidate| Rc::ptr_eq(candidate, sibling))
        });
        let Some(index) = index else {
            return;
        };

        if let NodeOrText::AppendText(ref text) = child {
            if index > 0 {
                let previous = parent
                    .borrow()
                    .children()
                    .and_then(|children| children.get(index - 1).cloned());
                if let Some(previous) = previous {
                    if merge_text(&previous, text) {
                        return;
                    }
                }
            }
        }

        let child_node = into_node(child);
        set_parent(&child_node, Some(&parent));
        let mut parent_node = parent.borrow_mut();
        if let Some(children) = parent_node.children_mut() {
            children.insert(index, child_node);
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        if let dom_tree::Node::Element(ref mut elem_node) = *target.borrow_mut() {
            for attr in attrs {
                let key = attr.name.local.to_string();
                if elem_node.attr(&key).is_none() {
                    elem_node.attributes.push((key, attr.value.to_string()));
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        if let Some(parent) = parent_of(target) {
            let mut parent_node = parent.borrow_mut();
            if let Some(children) = parent_node.children_mut() {
                children.retain(|child| !Rc::ptr_eq(child, target));
            }
        }
        set_parent(target, None);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let moved = match node.borrow_mut().children_mut() {
            Some(children) => std::mem::take(children),
            None => return,
        };
        for child in &moved {
            set_parent(child, Some(new_parent));
        }
        if let Some(children) = new_parent.borrow_mut().children_mut() {
            children.extend(moved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_tracks_quirks_mode() {
        let sink = PageTreeSink::new();
        sink.set_quirks_mode(QuirksMode::Quirks);
        assert_eq!(sink.quirks_mode(), QuirksMode::Quirks);
    }

    #[test]
    fn parses_doctype() {
        let document = create_dom_tree("<!DOCTYPE html><html><head></head></html>");
        let doctype = document.doctype.borrow();
        assert_eq!(doctype.as_ref().map(|d| d.name.as_str()), Some("html"));
    }

    #[test]
    fn elements_point_back_to_their_parent() {
        let document = create_dom_tree("<div id=\"outer\"><p id=\"inner\">x</p></div>");
        let inner = document.get_element_by_id("inner").expect("inner exists");
        let outer = document.get_element_by_id("outer").expect("outer exists");
        let parent = parent_of(&inner).expect("inner has a parent");
        assert!(Rc::ptr_eq(&parent, &outer));
    }
}
