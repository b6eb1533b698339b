//! Documentation index builder — one pass over the `doc/members` tree.

use crate::descriptor::{parse_descriptor, Kind};
use crate::error::Error;
use crate::model::{DocIndex, MemberDocs};
use crate::transform;
use crate::xml::Element;

/// Build the documentation index from a parsed `doc` root element.
///
/// A malformed `name` attribute is fatal. A malformed descriptor *inside* a
/// member's body (a bad `see` reference) drops only that member's entry, with
/// a warning on stderr. Duplicate identifiers overwrite earlier entries.
pub fn build(root: &Element) -> Result<DocIndex, Error> {
    let mut index = DocIndex::new();

    let Some(members) = root.child("members") else {
        return Ok(index);
    };

    for member in members.children_named("member") {
        let name_attr = member
            .attr("name")
            .ok_or_else(|| Error::MalformedDescriptor("member without name attribute".into()))?;
        let (kind, name) = parse_descriptor(name_attr)?;

        match member_docs(member, kind, &name) {
            Ok(docs) => {
                index.insert(docs.name.clone(), docs);
            }
            Err(Error::MalformedDescriptor(d)) => {
                eprintln!("warning: skipping documentation for {}: malformed descriptor {:?}", name, d);
            }
            Err(Error::UnknownDescriptorKind(l)) => {
                eprintln!("warning: skipping documentation for {}: unknown descriptor kind {:?}", name, l);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(index)
}

fn member_docs(member: &Element, kind: Kind, name: &str) -> Result<MemberDocs, Error> {
    let importance = member
        .child("importance")
        .map(|el| el.inner_text().trim().parse().unwrap_or(0))
        .unwrap_or(0);

    let mut params = Vec::new();
    for param in member.children_named("param") {
        if let Some(param_name) = param.attr("name") {
            let text = transform::element_to_markdown(param, name)?;
            params.push((param_name.to_string(), text.trim().to_string()));
        }
    }

    Ok(MemberDocs {
        kind,
        name: name.to_string(),
        importance,
        summary: section(member, "summary", name)?,
        remarks: section(member, "remarks", name)?,
        returns: section(member, "returns", name)?,
        example: section(member, "example", name)?,
        params,
    })
}

/// Transform a named child section to Markdown; absent or empty sections
/// become `None` so they are omitted from output.
fn section(member: &Element, tag: &str, current: &str) -> Result<Option<String>, Error> {
    let Some(el) = member.child(tag) else {
        return Ok(None);
    };
    let text = transform::element_to_markdown(el, current)?;
    let text = text.trim();
    Ok(if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    })
}
