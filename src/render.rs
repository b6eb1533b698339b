//! Markdown renderer — walks the type metadata, consults the documentation
//! index, and assembles the final cross-linked document.

use crate::error::Error;
use crate::metadata::{Constructor, Method, Param, TypeKind, TypeMeta, TypeProvider, TypeRef};
use crate::model::{DocIndex, MemberDocs};
use crate::signature;
use std::cmp::Reverse;

/// Base types too ubiquitous to be worth an "Extends" note.
const TRIVIAL_BASES: &[&str] = &["System.Object", "System.ValueType", "System.Enum"];

/// Render the whole document.
///
/// Types are ordered by descending importance (stable on ties, preserving
/// provider enumeration order) and separated by horizontal rules. A type
/// without a documentation entry is not rendered at all, even if its members
/// are documented.
pub fn render(provider: &dyn TypeProvider, index: &DocIndex) -> Result<String, Error> {
    let types = provider.exported_types()?;
    let mut ordered: Vec<&TypeMeta> = types.iter().collect();
    ordered.sort_by_key(|t| Reverse(importance_of(t, index)));

    let mut sections: Vec<String> = Vec::new();
    for ty in ordered {
        let Some(docs) = index.get(&ty.name) else {
            continue;
        };
        sections.push(render_type(ty, docs, index));
    }

    if sections.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{}\n", sections.join("\n\n---\n\n")))
}

fn importance_of(ty: &TypeMeta, index: &DocIndex) -> i32 {
    index.get(&ty.name).map(|d| d.importance).unwrap_or(0)
}

/// Render one documented type: anchor, heading, prose, member sections.
fn render_type(ty: &TypeMeta, docs: &MemberDocs, index: &DocIndex) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("<a id=\"{}\"></a>", ty.name));
    out.push(format!("## {} {}", kind_word(ty.kind), ty.name));

    if matches!(ty.kind, TypeKind::Class | TypeKind::Interface) {
        if let Some(base) = &ty.base {
            if !TRIVIAL_BASES.contains(&base.name.as_str()) {
                out.push(format!("Extends `{}`", signature::type_label(base)));
            }
        }
    }

    if let Some(summary) = &docs.summary {
        out.push(summary.clone());
    }
    if let Some(remarks) = &docs.remarks {
        out.push(remarks.clone());
    }
    if let Some(example) = &docs.example {
        out.push(format!("#### Examples\n\n{}", example));
    }

    if ty.kind == TypeKind::Enum {
        if !ty.values.is_empty() {
            let items: Vec<String> = ty.values.iter().map(|v| format!("* {}", v)).collect();
            out.push(format!("#### Enum Values\n\n{}", items.join("\n")));
        }
    } else {
        push_section(
            &mut out,
            "Constructors",
            ty.constructors
                .iter()
                .map(|c| constructor_entry(ty, c, index))
                .collect(),
        );
        push_section(
            &mut out,
            "Methods",
            ty.methods
                .iter()
                .filter(|m| !m.is_static && !is_accessor(m, ty))
                .map(|m| method_entry(ty, m, index))
                .collect(),
        );
        push_section(
            &mut out,
            "Events",
            ty.events
                .iter()
                .map(|e| value_entry(&ty.name, &e.name, &e.ty, index))
                .collect(),
        );
        push_section(
            &mut out,
            "Properties and Fields",
            properties_then_fields(ty, false, index),
        );
        push_section(
            &mut out,
            "Static Methods",
            ty.methods
                .iter()
                .filter(|m| m.is_static && !is_accessor(m, ty))
                .map(|m| method_entry(ty, m, index))
                .collect(),
        );
        push_section(
            &mut out,
            "Static Properties and Fields",
            properties_then_fields(ty, true, index),
        );
    }

    out.join("\n\n")
}

fn kind_word(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Class => "class",
        TypeKind::Struct => "struct",
        TypeKind::Interface => "interface",
        TypeKind::Enum => "enum",
    }
}

fn push_section(out: &mut Vec<String>, title: &str, entries: Vec<String>) {
    if entries.is_empty() {
        return;
    }
    out.push(format!("#### {}", title));
    out.extend(entries);
}

/// Property and event accessor methods never appear in the method lists.
fn is_accessor(method: &Method, ty: &TypeMeta) -> bool {
    match method.name.split_once('_') {
        Some(("get" | "set", rest)) => ty.properties.iter().any(|p| p.name == rest),
        Some(("add" | "remove", rest)) => ty.events.iter().any(|e| e.name == rest),
        _ => false,
    }
}

/// Combined value-member list: properties first, then fields.
fn properties_then_fields(ty: &TypeMeta, statics: bool, index: &DocIndex) -> Vec<String> {
    let mut entries: Vec<String> = ty
        .properties
        .iter()
        .filter(|p| p.is_static == statics)
        .map(|p| value_entry(&ty.name, &p.name, &p.ty, index))
        .collect();
    entries.extend(
        ty.fields
            .iter()
            .filter(|f| f.is_static == statics)
            .map(|f| value_entry(&ty.name, &f.name, &f.ty, index)),
    );
    entries
}

/// Matching identifier for a callable member. Zero-parameter callables carry
/// no parentheses in their identifier.
fn callable_key(type_name: &str, method_name: &str, params: &[Param]) -> String {
    if params.is_empty() {
        format!("{}.{}", type_name, method_name)
    } else {
        format!(
            "{}.{}{}",
            type_name,
            method_name,
            signature::canonical_signature(params)
        )
    }
}

fn constructor_entry(ty: &TypeMeta, ctor: &Constructor, index: &DocIndex) -> String {
    let key = callable_key(&ty.name, "#ctor", &ctor.params);
    let bullet = format!(
        "* **{}** *{}*",
        ty.short_name(),
        signature::human_signature(&ctor.params)
    );
    member_entry(&key, bullet, index.get(&key), &ctor.params)
}

fn method_entry(ty: &TypeMeta, method: &Method, index: &DocIndex) -> String {
    let key = callable_key(&ty.name, &method.name, &method.params);
    let returns = method
        .returns
        .as_ref()
        .map(signature::display_type)
        .unwrap_or_else(|| "void".to_string());
    let bullet = format!(
        "* *{}* **{}** *{}*",
        returns,
        method.name,
        signature::human_signature(&method.params)
    );
    member_entry(&key, bullet, index.get(&key), &method.params)
}

fn value_entry(type_name: &str, name: &str, ty: &TypeRef, index: &DocIndex) -> String {
    let key = format!("{}.{}", type_name, name);
    let bullet = format!("* *{}* **{}**", signature::display_type(ty), name);
    member_entry(&key, bullet, index.get(&key), &[])
}

/// One member list entry: anchor, bullet, and — when documented — summary,
/// remarks, and parameter descriptions indented beneath it. Undocumented
/// members still get their bullet.
fn member_entry(
    key: &str,
    bullet: String,
    docs: Option<&MemberDocs>,
    params: &[Param],
) -> String {
    let mut entry = format!("<a id=\"{}\"></a>\n{}", key, bullet);
    if let Some(docs) = docs {
        if let Some(summary) = &docs.summary {
            entry.push('\n');
            entry.push_str(&indented(summary));
        }
        if let Some(remarks) = &docs.remarks {
            entry.push('\n');
            entry.push_str(&indented(remarks));
        }
        for param in params {
            if let Some(desc) = docs.param(&param.name) {
                entry.push_str(&format!(
                    "\n  - `{}`: {}",
                    param.name,
                    desc.replace('\n', "\n    ")
                ));
            }
        }
    }
    entry
}

fn indented(text: &str) -> String {
    format!("  {}", text.replace('\n', "\n  "))
}
