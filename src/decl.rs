// Declaration model handed to the schema builder. No tree-sitter types here.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Struct { fields: Vec<Field> },   // declaration order
    Array { element: FieldTypeShape }, // only `*Named` elements are summarized
    Other,                           // interfaces, maps, funcs, plain aliases
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<String>,          // never empty; embedded fields carry their type name
    pub type_shape: FieldTypeShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_tag: Option<String>,     // literal content, quotes stripped
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldTypeShape {
    Named { ident: String },
    Pointer { inner: Box<FieldTypeShape> },
    Interface,
    ArrayOf { inner: Box<FieldTypeShape> },
    Selector { owner: String, member: String },
    Unrecognized { node: String, text: String },
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self { name: name.into(), shape }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, type_shape: FieldTypeShape, raw_tag: Option<&str>) -> Self {
        Self {
            names: vec![name.into()],
            type_shape,
            raw_tag: raw_tag.map(str::to_owned),
        }
    }

    /// First declared name; used when the json directive leaves the name empty.
    pub fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

impl FieldTypeShape {
    pub fn named(ident: impl Into<String>) -> Self {
        Self::Named { ident: ident.into() }
    }
    pub fn pointer(inner: FieldTypeShape) -> Self {
        Self::Pointer { inner: Box::new(inner) }
    }
    pub fn array_of(inner: FieldTypeShape) -> Self {
        Self::ArrayOf { inner: Box::new(inner) }
    }
    pub fn selector(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self::Selector { owner: owner.into(), member: member.into() }
    }
}
