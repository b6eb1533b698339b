//! Doc-text transformer — recursive conversion of documentation XML
//! fragments into Markdown prose.
//!
//! Text content keeps the column indentation of the XML file it was written
//! in; `correct_indent` strips exactly that incidental indentation so the
//! author's relative indentation (nested lists, code layout) survives.

use crate::descriptor::{parse_descriptor, shorten_name};
use crate::error::Error;
use crate::xml::{Element, Node};

/// Fence tag for `code` blocks — the documentation dialect's source language.
const CODE_LANGUAGE: &str = "csharp";

/// Convert a documentation element into Markdown.
///
/// `current` is the fully-qualified name of the member being documented;
/// cross-reference labels are shortened relative to it.
pub fn element_to_markdown(el: &Element, current: &str) -> Result<String, Error> {
    match el.name.as_str() {
        "see" => cross_reference(el, current),
        "code" => Ok(code_block(el)),
        _ => children_to_markdown(el, current),
    }
}

/// Concatenate the transformed children of a container element in document
/// order. Text children are indentation-corrected against the container's
/// column; non-element, non-text children were already dropped by the parser.
fn children_to_markdown(el: &Element, current: &str) -> Result<String, Error> {
    let mut out = String::new();
    for child in &el.children {
        match child {
            Node::Text(t) => out.push_str(&correct_indent(t, el.column)),
            Node::Element(e) => out.push_str(&element_to_markdown(e, current)?),
        }
    }
    Ok(out)
}

/// Render a `see` element as an inline Markdown link.
///
/// The label is the element's literal inner text when present, otherwise the
/// target name shortened relative to the current member. Single surrounding
/// spaces let the link compose inside running prose.
fn cross_reference(el: &Element, current: &str) -> Result<String, Error> {
    let cref = el
        .attr("cref")
        .ok_or_else(|| Error::MalformedDescriptor("see element without cref".into()))?;
    let (_, target) = parse_descriptor(cref)?;

    let literal = el.inner_text();
    let label = if literal.is_empty() {
        shorten_name(&target, current)
    } else {
        literal
    };

    Ok(format!(" [{}](#{}) ", label, target))
}

/// Render a `code` element as a fenced code block. Markup inside the block
/// is not interpreted; only its text content is kept.
fn code_block(el: &Element) -> String {
    let inner = correct_indent(&el.inner_text(), el.column);
    format!("\n```{}\n{}\n```\n", CODE_LANGUAGE, inner)
}

/// Strip the XML source-file indentation from text content.
///
/// `column` is the 1-based column of the enclosing element's name character,
/// so `column - 2` is the width of the incidental indentation every line
/// after the first carries. That many spaces are removed wherever a line
/// starts with them, then the whole result is trimmed. A zero or negative
/// width only trims.
pub fn correct_indent(text: &str, column: usize) -> String {
    let width = column.saturating_sub(2);
    if width == 0 {
        return text.trim().to_string();
    }
    let indent = format!("\n{}", " ".repeat(width));
    text.replace(&indent, "\n").trim().to_string()
}
