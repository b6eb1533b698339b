//! Data model for parsed documentation entries.

use crate::descriptor::Kind;
use std::collections::HashMap;

/// Lookup from fully-qualified member identifiers to their documentation.
///
/// Built once from the documentation source, read-only afterwards.
pub type DocIndex = HashMap<String, MemberDocs>;

/// Documentation for a single symbol, with all prose already rendered to
/// Markdown.
#[derive(Debug)]
pub struct MemberDocs {
    /// Symbol kind; carried for model completeness, not consulted when
    /// rendering.
    #[allow(dead_code)]
    pub kind: Kind,
    /// Exact match key against metadata-derived identifiers.
    pub name: String,
    /// Sort weight for top-level type ordering; higher sorts first.
    pub importance: i32,
    pub summary: Option<String>,
    pub remarks: Option<String>,
    /// Return-value prose; indexed but not emitted in the output layout.
    #[allow(dead_code)]
    pub returns: Option<String>,
    pub example: Option<String>,
    /// Parameter descriptions, in document order.
    pub params: Vec<(String, String)>,
}

impl MemberDocs {
    /// Description for the named parameter, if documented.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }
}
