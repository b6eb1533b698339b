//! Minimal positional XML tree over the `quick-xml` event reader.
//!
//! Documentation bodies are written inside indented XML, so every element
//! records the column of its opening tag; the doc-text transformer uses it to
//! strip the incidental source-file indentation from text content.

use crate::error::Error;
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed XML node: prose text or a child element.
#[derive(Debug)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// A parsed XML element with source column tracking.
#[derive(Debug)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// 1-based column of the element's name character (just after `<`).
    pub column: usize,
}

impl Element {
    /// Value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| match c {
            Node::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |c| match c {
            Node::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    /// Concatenated text content of this element and its descendants.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

/// Parse an XML document into its root element.
///
/// Comments, processing instructions, and declarations are dropped; text and
/// CDATA become [`Node::Text`].
pub fn parse(src: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(src);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        // buffer_position reports u64; offsets into `src` are usize.
        let pos = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(element_at(src, pos, &e)?);
            }
            Ok(Event::Empty(e)) => {
                let el = element_at(src, pos, &e)?;
                attach(&mut stack, &mut root, Node::Element(el))?;
            }
            Ok(Event::End(_)) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| Error::MalformedDocument("unmatched end tag".into()))?;
                attach(&mut stack, &mut root, Node::Element(el))?;
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::MalformedDocument(e.to_string()))?
                    .into_owned();
                if !stack.is_empty() {
                    attach(&mut stack, &mut root, Node::Text(text))?;
                }
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                if !stack.is_empty() {
                    attach(&mut stack, &mut root, Node::Text(text))?;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // comments, PIs, declarations
            Err(e) => return Err(Error::MalformedDocument(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(Error::MalformedDocument("unclosed element".into()));
    }
    root.ok_or_else(|| Error::MalformedDocument("no root element".into()))
}

/// Build an element from a start tag, recording its source column.
fn element_at(
    src: &str,
    offset: usize,
    tag: &quick_xml::events::BytesStart<'_>,
) -> Result<Element, Error> {
    let mut attrs = Vec::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| Error::MalformedDocument(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::MalformedDocument(e.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }

    Ok(Element {
        name: String::from_utf8_lossy(tag.name().as_ref()).into_owned(),
        attrs,
        children: Vec::new(),
        column: column_of_name(src, offset),
    })
}

/// 1-based column of the name character of a tag whose `<` sits at `offset`.
fn column_of_name(src: &str, offset: usize) -> usize {
    let line_start = src[..offset.min(src.len())]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    offset - line_start + 2
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, node: Node) -> Result<(), Error> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    match node {
        Node::Element(el) => {
            if root.is_some() {
                return Err(Error::MalformedDocument("multiple root elements".into()));
            }
            *root = Some(el);
            Ok(())
        }
        Node::Text(_) => Ok(()), // whitespace outside the root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_elements() {
        let root = parse("<doc><members><member name=\"T:A\"/></members></doc>").unwrap();
        assert_eq!(root.name, "doc");
        let members = root.child("members").unwrap();
        let member = members.child("member").unwrap();
        assert_eq!(member.attr("name"), Some("T:A"));
    }

    #[test]
    fn parse_preserves_text_whitespace() {
        let root = parse("<a>\n    line one\n    line two\n</a>").unwrap();
        match &root.children[0] {
            Node::Text(t) => assert_eq!(t, "\n    line one\n    line two\n"),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn column_tracks_indentation() {
        let root = parse("<a>\n    <b>x</b>\n</a>").unwrap();
        assert_eq!(root.column, 2);
        let b = root.child("b").unwrap();
        // "    <b>" — name character at column 6
        assert_eq!(b.column, 6);
    }

    #[test]
    fn column_tracked_after_text_event() {
        let root = parse("<a>\n        <b>x</b>\n</a>").unwrap();
        // "        <b>" — name character at column 10
        assert_eq!(root.child("b").unwrap().column, 10);
    }

    #[test]
    fn column_at_each_nesting_level() {
        let root = parse(concat!(
            "<doc>\n",
            "    <members>\n",
            "        <member>\n",
            "            <summary>x</summary>\n",
            "        </member>\n",
            "    </members>\n",
            "</doc>",
        ))
        .unwrap();
        let members = root.child("members").unwrap();
        let member = members.child("member").unwrap();
        let summary = member.child("summary").unwrap();
        assert_eq!(root.column, 2);
        assert_eq!(members.column, 6);
        assert_eq!(member.column, 10);
        assert_eq!(summary.column, 14);
    }

    #[test]
    fn child_lookup_with_short_lived_name() {
        let root = parse("<a><b/><c/></a>").unwrap();
        let name = String::from("c");
        assert!(root.child(&name).is_some());
        assert!(root.child(&String::from("d")).is_none());
    }

    #[test]
    fn unescapes_entities() {
        let root = parse("<a>one &amp; two</a>").unwrap();
        assert_eq!(root.inner_text(), "one & two");
    }

    #[test]
    fn inner_text_spans_markup() {
        let root = parse("<a>x<b>y</b>z</a>").unwrap();
        assert_eq!(root.inner_text(), "xyz");
    }

    #[test]
    fn rejects_unclosed_element() {
        assert!(parse("<a><b></a>").is_err());
    }
}
