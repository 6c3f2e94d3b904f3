use jsonstyle_lib::dom::dom_tree;
use jsonstyle_lib::parser::html::create_dom_tree;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn collect_structure(node: &Rc<RefCell<dom_tree::Node>>) -> String {
    let mut output = String::new();
    traverse_node(node, 0, &mut output);
    output
}

fn traverse_node(node: &Rc<RefCell<dom_tree::Node>>, depth: usize, output: &mut String) {
    let node_ref = node.borrow();
    match &*node_ref {
        dom_tree::Node::DocumentRoot(root_node) => {
            for child in &root_node.children {
                traverse_node(child, depth, output);
            }
        }
        dom_tree::Node::Element(elem_node) => {
            *output += &format!("{}<{}>\n", "  ".repeat(depth), elem_node.tag);
            for child in &elem_node.children {
                traverse_node(child, depth + 1, output);
            }
        }
        dom_tree::Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                *output += &format!("{}{}\n", "  ".repeat(depth), trimmed);
            }
        }
        dom_tree::Node::Comment(_) => {}
    }
}

#[test]
fn test_basic_structure() {
    let html = r#"
        <!DOCTYPE html>
        <html>
            <head>
                <style id="style-block"></style>
            </head>
            <body>
                <header><p id="header-text">Hello</p></header>
            </body>
        </html>
    "#;

    let document = create_dom_tree(html);
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
    <style>
  <body>
    <header>
      <p>
        Hello
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_nested_elements() {
    let html = r#"
        <div class="container">
            <div class="row">
                <div class="col">1</div>
                <div class="col">2</div>
            </div>
        </div>
    "#;

    let document = create_dom_tree(html);
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    <div>
      <div>
        <div>
          1
        <div>
          2
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_attributes_keep_source_order() {
    let html = r#"<a href="https://example.com" target="_blank" data-test="123">Link</a>"#;
    let document = create_dom_tree(html);

    let mut attributes = Vec::new();
    if let dom_tree::Node::DocumentRoot(root) = &*document.root.borrow() {
        if let Some(html_node) = root.children.first() {
            if let dom_tree::Node::Element(html_elem) = &*html_node.borrow() {
                if let Some(body_node) = html_elem.children.get(1) {
                    if let dom_tree::Node::Element(body_elem) = &*body_node.borrow() {
                        if let Some(a_node) = body_elem.children.first() {
                            if let dom_tree::Node::Element(a_elem) = &*a_node.borrow() {
                                attributes = a_elem.attributes.clone();
                            }
                        }
                    }
                }
            }
        }
    }

    assert_eq!(
        attributes,
        vec![
            ("href".to_string(), "https://example.com".to_string()),
            ("target".to_string(), "_blank".to_string()),
            ("data-test".to_string(), "123".to_string())
        ]
    );
}

#[test]
fn test_adjacent_text_is_merged() {
    let document = create_dom_tree("<p id=\"t\">Tom &amp; Jerry</p>");
    let p = document.get_element_by_id("t").expect("paragraph");
    assert_eq!(p.borrow().children().map(Vec::len), Some(1));
    assert_eq!(dom_tree::text_content(&p), "Tom & Jerry");
}

#[test]
fn test_malformed_html() {
    let html = r#"
        <div>
            <p>Unclosed
            <img>
            </div>
    "#;

    let document = create_dom_tree(html);
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    <div>
      <p>
        Unclosed
        <img>
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_table_autocorrection() {
    let html = "<table><td>Cell</td></table>";
    let document = create_dom_tree(html);

    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    <table>
      <tbody>
        <tr>
          <td>
            Cell
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_foster_parented_text_lands_before_table() {
    let document = create_dom_tree("<table>stray<tr><td>Cell</td></tr></table>");
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    stray
    <table>
      <tbody>
        <tr>
          <td>
            Cell
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_misnested_formatting_is_repaired() {
    let document = create_dom_tree("<p><b>one<i>two</b>three</i></p>");
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    <p>
      <b>
        one
        <i>
          two
      <i>
        three
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_formatting_element_is_split_around_a_block() {
    let document = create_dom_tree("<b>1<p>2</b>3</p>");
    let structure = collect_structure(&document.root);

    let expected = r#"
<html>
  <head>
  <body>
    <b>
      1
    <p>
      <b>
        2
      3
"#;
    assert_eq!(structure.trim(), expected.trim());
}

#[test]
fn test_get_element_by_id_misses() {
    let document = create_dom_tree("<p id=\"a\"></p>");
    assert!(document.get_element_by_id("a").is_some());
    assert!(document.get_element_by_id("b").is_none());
}
