//! Field type shape -> schema type.
//!
//! Two steps: resolve the shape to an element type name (unwrapping at most one
//! pointer), then map that name through the primitive table. Names outside the
//! table become references to other declarations.
use crate::decl::{Field, FieldTypeShape};
use crate::error::ClassificationError;
use crate::schema::PropertySpec;

pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

pub fn property_spec(field: &Field) -> Result<PropertySpec, ClassificationError> {
    let element = element_type(field)?;
    Ok(schema_type(element))
}

/// Resolve the element type name of a field.
pub fn element_type(field: &Field) -> Result<&str, ClassificationError> {
    match &field.type_shape {
        FieldTypeShape::Named { ident } => Ok(ident.as_str()),
        FieldTypeShape::Pointer { inner } => match inner.as_ref() {
            FieldTypeShape::Named { ident } => Ok(ident.as_str()),
            FieldTypeShape::Interface => Ok("object"),
            FieldTypeShape::ArrayOf { .. } => Ok("array"),
            // the package qualifier is dropped
            FieldTypeShape::Selector { member, .. } => Ok(member.as_str()),
            other => Err(ClassificationError::UnsupportedPointee {
                field: field.primary_name().to_owned(),
                shape: other.clone(),
            }),
        },
        FieldTypeShape::Interface => Ok("object"),
        FieldTypeShape::ArrayOf { .. } => Ok("array"),
        other => Err(ClassificationError::UnsupportedType {
            field: field.primary_name().to_owned(),
            shape: other.clone(),
        }),
    }
}

/// Map an element type name to a primitive schema type or a definition reference.
pub fn schema_type(element: &str) -> PropertySpec {
    let primitive = match element {
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" => "integer",
        "bool" => "boolean",
        "float32" | "float64" => "number",
        "string" | "object" | "array" => element,
        _ => return PropertySpec::Ref(definition_ref(element)),
    };
    PropertySpec::Type(primitive.to_owned())
}

pub fn definition_ref(name: &str) -> String {
    format!("{DEFINITIONS_PREFIX}{name}")
}
