use indexmap::IndexMap;
use serde::Serialize;

use crate::tag::JsonDirective;

/// One property's schema: a primitive/container type or a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertySpec {
    #[serde(rename = "type")]
    Type(String),
    #[serde(rename = "$ref")]
    Ref(String),
}

/// Which string goes into `required` for a non-optional property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredNames {
    /// The resolved property name.
    #[default]
    Resolved,
    /// The json directive content verbatim (`name,string`, `,string`, ...).
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: IndexMap<String, PropertySpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    pub fn object() -> Self {
        Self {
            kind: "object",
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// Add one property. Re-using a name keeps its first position and takes the
    /// new spec; `required` is append-only and may repeat names.
    pub fn insert(
        &mut self,
        directive: &JsonDirective<'_>,
        spec: PropertySpec,
        names: RequiredNames,
    ) {
        self.properties.insert(directive.name.clone(), spec);
        if !directive.omit_empty {
            let required = match names {
                RequiredNames::Resolved => directive.name.clone(),
                RequiredNames::Literal => directive.raw.to_owned(),
            };
            self.required.push(required);
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
