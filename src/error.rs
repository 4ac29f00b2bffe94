use std::path::PathBuf;

use thiserror::Error;

use crate::decl::FieldTypeShape;

/// A field or array element whose type shape has no schema mapping.
///
/// Carries a debug dump of the offending shape; any of these aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("unsupported data type in field '{field}':\n{shape:#?}")]
    UnsupportedType { field: String, shape: FieldTypeShape },

    #[error("unknown pointer target in field '{field}':\n{shape:#?}")]
    UnsupportedPointee { field: String, shape: FieldTypeShape },

    #[error(
        "array declaration '{declaration}' must hold pointers to named types, found:\n{shape:#?}"
    )]
    UnsupportedArrayElement { declaration: String, shape: FieldTypeShape },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("{}:{line}:{column}: syntax error near `{near}`", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        near: String,
    },

    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("invalid declaration list: {message}")]
    Declarations { message: String },

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("failed to render schema for '{name}'")]
    Render {
        name: String,
        #[source]
        cause: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
