//! Single pass over type declarations.
//!
//! Each declaration is classified on its own: arrays of `*T` collapse to a
//! reference note, structs grow a schema from their tagged fields, and
//! everything else is skipped. Nothing is shared between declarations, so the
//! pass can be consumed lazily and restarted at will.
use tracing::{debug, warn};

use crate::classify;
use crate::decl::{Field, FieldTypeShape, Shape, TypeDeclaration};
use crate::error::ClassificationError;
use crate::schema::{RequiredNames, Schema};
use crate::tag;

// ------------------------------- Results --------------------------------- //

/// Everything printed for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub name: &'a str,
    /// `owner.member` for each inline-embedded qualified type.
    pub inherits: Vec<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Array declaration; holds the element's definition name.
    ArrayOf(String),
    Schema(Schema),
    /// Struct without a single tagged field.
    Empty,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub required_names: RequiredNames,
}

// ------------------------------- Front API -------------------------------- //

#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    options: BuildOptions,
}

impl SchemaBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// `Ok(None)` means the declaration is neither a struct nor an array.
    pub fn build<'a>(
        &self,
        decl: &'a TypeDeclaration,
    ) -> Result<Option<Report<'a>>, ClassificationError> {
        match &decl.shape {
            Shape::Array { element } => {
                let element = array_element(&decl.name, element)?;
                debug!(declaration = %decl.name, %element, "array declaration");
                Ok(Some(Report {
                    name: &decl.name,
                    inherits: Vec::new(),
                    body: Body::ArrayOf(element.to_owned()),
                }))
            }
            Shape::Struct { fields } => self.build_struct(&decl.name, fields).map(Some),
            Shape::Other => {
                debug!(declaration = %decl.name, "skipping non-struct declaration");
                Ok(None)
            }
        }
    }

    /// Lazily build every declaration in order, skipping the ignored ones.
    pub fn build_all<'a>(
        &'a self,
        decls: &'a [TypeDeclaration],
    ) -> impl Iterator<Item = Result<Report<'a>, ClassificationError>> + 'a {
        decls.iter().filter_map(move |decl| self.build(decl).transpose())
    }

    fn build_struct<'a>(
        &self,
        name: &'a str,
        fields: &[Field],
    ) -> Result<Report<'a>, ClassificationError> {
        let mut schema: Option<Schema> = None;
        let mut inherits = Vec::new();

        for field in fields.iter().filter(|f| f.raw_tag.is_some()) {
            let schema = schema.get_or_insert_with(Schema::object);

            if tag::is_inline(field) {
                match inline_base(&field.type_shape) {
                    Some(base) => inherits.push(base),
                    None => warn!(
                        declaration = name,
                        field = field.primary_name(),
                        "inline directive on a type without a package qualifier; no note emitted"
                    ),
                }
            }

            let Some(directive) = tag::json_directive(field) else {
                continue;
            };
            let spec = classify::property_spec(field)?;
            debug!(
                declaration = name,
                property = %directive.name,
                ?spec,
                required = !directive.omit_empty
            );
            schema.insert(&directive, spec, self.options.required_names);
        }

        let body = match schema {
            Some(schema) => Body::Schema(schema),
            None => Body::Empty,
        };
        Ok(Report { name, inherits, body })
    }
}

// ------------------------------- Helpers ---------------------------------- //

fn array_element<'a>(
    declaration: &str,
    element: &'a FieldTypeShape,
) -> Result<&'a str, ClassificationError> {
    if let FieldTypeShape::Pointer { inner } = element {
        if let FieldTypeShape::Named { ident } = inner.as_ref() {
            return Ok(ident.as_str());
        }
    }
    Err(ClassificationError::UnsupportedArrayElement {
        declaration: declaration.to_owned(),
        shape: element.clone(),
    })
}

fn inline_base(shape: &FieldTypeShape) -> Option<String> {
    match shape {
        FieldTypeShape::Selector { owner, member } => Some(format!("{owner}.{member}")),
        FieldTypeShape::Pointer { inner } => match inner.as_ref() {
            FieldTypeShape::Selector { owner, member } => Some(format!("{owner}.{member}")),
            _ => None,
        },
        _ => None,
    }
}

// ------------------------------- Tests ------------------------------------ //
