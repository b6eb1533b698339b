//! Signature formatter — parameter lists and type names, in human-readable
//! and canonical-matching forms.

use crate::metadata::{Param, TypeRef};

/// Short keyword forms for the built-in primitive types.
const TYPE_KEYWORDS: &[(&str, &str)] = &[
    ("System.Boolean", "bool"),
    ("System.Byte", "byte"),
    ("System.Char", "char"),
    ("System.Decimal", "decimal"),
    ("System.Double", "double"),
    ("System.Int16", "short"),
    ("System.Int32", "int"),
    ("System.Int64", "long"),
    ("System.Object", "object"),
    ("System.SByte", "sbyte"),
    ("System.Single", "float"),
    ("System.String", "string"),
    ("System.UInt16", "ushort"),
    ("System.UInt32", "uint"),
    ("System.UInt64", "ulong"),
    ("System.Void", "void"),
];

fn keyword(name: &str) -> Option<&'static str> {
    TYPE_KEYWORDS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, kw)| *kw)
}

/// Nested-type separators normalized to dots.
fn normalize(name: &str) -> String {
    name.replace('+', ".")
}

/// Human-readable type name: keyword for primitives, fully-qualified name
/// otherwise; generic arguments recurse with HTML-escaped angle brackets.
pub fn display_type(t: &TypeRef) -> String {
    let name = normalize(&t.name);
    let shown = keyword(&name).map(str::to_string).unwrap_or(name);
    if t.args.is_empty() {
        return shown;
    }
    let args: Vec<String> = t.args.iter().map(display_type).collect();
    format!("{}&lt;{}&gt;", shown, args.join(", "))
}

/// Plain rendering of a type name for code-span contexts, where HTML
/// escaping is unwanted. No keyword substitution.
pub fn type_label(t: &TypeRef) -> String {
    let name = normalize(&t.name);
    if t.args.is_empty() {
        return name;
    }
    let args: Vec<String> = t.args.iter().map(type_label).collect();
    format!("{}<{}>", name, args.join(", "))
}

/// Canonical type name used for identifier matching: full names, generics in
/// the documentation file's `Outer{Arg}` convention.
fn canonical_type(t: &TypeRef) -> String {
    let name = normalize(&t.name);
    if t.args.is_empty() {
        return name;
    }
    let args: Vec<String> = t.args.iter().map(canonical_type).collect();
    format!("{}{{{}}}", name, args.join(","))
}

/// Human-readable parameter list: `(int count, [string label])`.
/// Optional parameters are bracketed around their type/name pair.
pub fn human_signature(params: &[Param]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|p| {
            let pair = format!("{} {}", display_type(&p.ty), p.name);
            if p.optional {
                format!("[{}]", pair)
            } else {
                pair
            }
        })
        .collect();
    format!("({})", rendered.join(", "))
}

/// Canonical parameter list used only to build matching keys:
/// `(Full.Type1,Full.Type2)` — no spaces, no optional brackets.
pub fn canonical_signature(params: &[Param]) -> String {
    let rendered: Vec<String> = params.iter().map(|p| canonical_type(&p.ty)).collect();
    format!("({})", rendered.join(","))
}
