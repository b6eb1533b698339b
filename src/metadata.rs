//! Type metadata model and provider seam.
//!
//! The renderer only ever sees the read-only [`TypeProvider`] query surface;
//! the shipped implementation deserializes a JSON artifact describing the
//! program's exported types.

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A reference to a type, with generic arguments kept structural.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub optional: bool,
    /// Default value for optional parameters; informational only.
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Absent means void.
    #[serde(default)]
    pub returns: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// One exported type with its public members.
#[derive(Debug, Deserialize)]
pub struct TypeMeta {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<TypeRef>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub events: Vec<Event>,
    /// Enum value names, in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl TypeMeta {
    /// Last dot-separated segment of the fully-qualified name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// Read-only source of a program's exported types.
pub trait TypeProvider {
    /// Exported types in the artifact's enumeration order.
    fn exported_types(&self) -> Result<&[TypeMeta], Error>;
}

/// JSON-backed metadata artifact.
#[derive(Debug, Deserialize)]
pub struct JsonArtifact {
    #[serde(default)]
    types: Vec<TypeMeta>,
}

impl JsonArtifact {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::MetadataLoad(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&data)
            .map_err(|e| Error::MetadataLoad(format!("{}: {}", path.display(), e)))
    }
}

impl TypeProvider for JsonArtifact {
    fn exported_types(&self) -> Result<&[TypeMeta], Error> {
        Ok(&self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_type() {
        let artifact: JsonArtifact = serde_json::from_str(
            r#"{ "types": [ { "name": "N.C", "kind": "class" } ] }"#,
        )
        .unwrap();
        let types = artifact.exported_types().unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "N.C");
        assert_eq!(types[0].kind, TypeKind::Class);
        assert!(types[0].base.is_none());
        assert!(types[0].methods.is_empty());
    }

    #[test]
    fn deserializes_method_with_params() {
        let artifact: JsonArtifact = serde_json::from_str(
            r#"{ "types": [ { "name": "N.C", "kind": "struct", "methods": [
                { "name": "Foo", "static": true,
                  "returns": { "name": "System.Int32" },
                  "params": [ { "name": "x", "type": { "name": "System.String" },
                               "optional": true, "default": "null" } ] }
            ] } ] }"#,
        )
        .unwrap();
        let m = &artifact.exported_types().unwrap()[0].methods[0];
        assert!(m.is_static);
        assert_eq!(m.returns.as_ref().unwrap().name, "System.Int32");
        assert!(m.params[0].optional);
        assert_eq!(m.params[0].default.as_deref(), Some("null"));
    }

    #[test]
    fn short_name_is_last_segment() {
        let artifact: JsonArtifact =
            serde_json::from_str(r#"{ "types": [ { "name": "A.B.C", "kind": "class" } ] }"#)
                .unwrap();
        assert_eq!(artifact.exported_types().unwrap()[0].short_name(), "C");
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(serde_json::from_str::<JsonArtifact>(
            r#"{ "types": [ { "name": "N.C", "kind": "delegate" } ] }"#
        )
        .is_err());
    }
}
