use serde::de::DeserializeOwned;

use crate::decl::TypeDeclaration;
use crate::error::{Error, Result};

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        Error::Declarations {
            message: format!("at JSON path {path} → {}", err.into_inner()),
        }
    })
}

/// Load a declaration list previously written with `--dump-declarations`.
pub fn declarations_from_str(src: &str) -> Result<Vec<TypeDeclaration>> {
    from_str_with_path(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{FieldTypeShape, Shape};
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_declaration_dump() {
        let src = r#"[
            {"name": "Tags", "shape": {
                "kind": "array",
                "element": {"kind": "pointer", "inner": {"kind": "named", "ident": "Tag"}}
            }},
            {"name": "Doer", "shape": {"kind": "other"}}
        ]"#;
        let decls = declarations_from_str(src).unwrap();
        assert_eq!(decls, vec![
            TypeDeclaration::new("Tags", Shape::Array {
                element: FieldTypeShape::pointer(FieldTypeShape::named("Tag")),
            }),
            TypeDeclaration::new("Doer", Shape::Other),
        ]);
    }

    #[test]
    fn error_names_the_json_path() {
        let src = r#"[{"name": "User", "shape": {"kind": "struct", "fields": [
            {"names": ["Name"], "type_shape": {"kind": "blob"}}
        ]}}]"#;
        let err = declarations_from_str(src).unwrap_err().to_string();
        assert!(err.contains("[0].shape"), "{err}");
    }
}
