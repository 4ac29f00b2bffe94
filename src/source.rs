//! Go source -> type declarations, using tree-sitter.
//!
//! Only file-level `type` declarations are read, in source order. Anything the
//! schema builder has no use for is reduced to `Shape::Other` or
//! `FieldTypeShape::Unrecognized` here rather than rejected, so that the
//! builder decides what is fatal.
use std::path::Path;

use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::decl::{Field, FieldTypeShape, Shape, TypeDeclaration};
use crate::error::{Error, Result};

pub fn parse_file(path: &Path) -> Result<Vec<TypeDeclaration>> {
    let content = std::fs::read_to_string(path).map_err(|cause| Error::Read {
        path: path.to_path_buf(),
        cause,
    })?;
    parse_source(path, &content)
}

/// `path` is only used for error messages.
pub fn parse_source(path: &Path, content: &str) -> Result<Vec<TypeDeclaration>> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

    let tree = parser.parse(content, None).ok_or_else(|| Error::Parse {
        path: path.to_path_buf(),
        line: 1,
        column: 1,
        near: String::new(),
    })?;

    let root = tree.root_node();
    if root.has_error() {
        let bad = first_error(root).unwrap_or(root);
        let pos = bad.start_position();
        let near = text(bad, content).lines().next().unwrap_or_default().to_owned();
        return Err(Error::Parse {
            path: path.to_path_buf(),
            line: pos.row + 1,
            column: pos.column + 1,
            near,
        });
    }

    let src = content.as_bytes();
    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for item in root.named_children(&mut cursor) {
        if item.kind() != "type_declaration" {
            continue;
        }
        let mut specs = item.walk();
        for spec in item.named_children(&mut specs) {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            let name = spec.child_by_field_name("name");
            let (Some(name), Some(ty)) = (name, spec.child_by_field_name("type")) else {
                continue;
            };
            let name = text(name, content).to_owned();
            let shape = declaration_shape(ty, src);
            debug!(declaration = %name, kind = ty.kind(), "found type declaration");
            decls.push(TypeDeclaration { name, shape });
        }
    }
    Ok(decls)
}

// ————————————————————————————————————————————————————————————————————————————
// SHAPES
// ————————————————————————————————————————————————————————————————————————————

fn declaration_shape(ty: Node<'_>, src: &[u8]) -> Shape {
    match ty.kind() {
        "struct_type" => Shape::Struct { fields: struct_fields(ty, src) },
        "slice_type" | "array_type" => match ty.child_by_field_name("element") {
            Some(element) => Shape::Array { element: field_type_shape(element, src) },
            None => Shape::Other,
        },
        _ => Shape::Other,
    }
}

fn struct_fields(ty: Node<'_>, src: &[u8]) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut cursor = ty.walk();
    let list = ty
        .named_children(&mut cursor)
        .find(|n| n.kind() == "field_declaration_list");
    let Some(list) = list else {
        return fields;
    };
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        if decl.kind() != "field_declaration" {
            continue;
        }
        let Some(type_node) = decl.child_by_field_name("type") else {
            continue;
        };
        let mut type_shape = field_type_shape(type_node, src);

        let mut names_cursor = decl.walk();
        let mut names: Vec<String> = decl
            .children_by_field_name("name", &mut names_cursor)
            .map(|n| utf8(n, src).to_owned())
            .collect();

        if names.is_empty() {
            // embedded: `T`, `*T`, `pkg.T` or `*pkg.T`; the field is named after the type
            let mut children = decl.walk();
            let starred = decl.children(&mut children).any(|c| !c.is_named() && c.kind() == "*");
            if starred {
                type_shape = FieldTypeShape::pointer(type_shape);
            }
            names.push(embedded_name(type_node, src));
        }

        let raw_tag = decl.child_by_field_name("tag").map(|t| tag_content(utf8(t, src)));
        fields.push(Field { names, type_shape, raw_tag });
    }
    fields
}

fn field_type_shape(node: Node<'_>, src: &[u8]) -> FieldTypeShape {
    match node.kind() {
        "type_identifier" => FieldTypeShape::named(utf8(node, src)),
        "qualified_type" => {
            let owner = node.child_by_field_name("package");
            match (owner, node.child_by_field_name("name")) {
                (Some(owner), Some(member)) => {
                    FieldTypeShape::selector(utf8(owner, src), utf8(member, src))
                }
                _ => unrecognized(node, src),
            }
        }
        "pointer_type" => {
            let mut cursor = node.walk();
            let inner = node.named_children(&mut cursor).next();
            match inner {
                Some(inner) => FieldTypeShape::pointer(field_type_shape(inner, src)),
                None => unrecognized(node, src),
            }
        }
        "interface_type" => FieldTypeShape::Interface,
        "slice_type" | "array_type" => match node.child_by_field_name("element") {
            Some(element) => FieldTypeShape::array_of(field_type_shape(element, src)),
            None => unrecognized(node, src),
        },
        _ => unrecognized(node, src),
    }
}

fn unrecognized(node: Node<'_>, src: &[u8]) -> FieldTypeShape {
    FieldTypeShape::Unrecognized {
        node: node.kind().to_owned(),
        text: utf8(node, src).to_owned(),
    }
}

fn embedded_name(type_node: Node<'_>, src: &[u8]) -> String {
    match type_node.kind() {
        "qualified_type" => type_node
            .child_by_field_name("name")
            .map(|n| utf8(n, src).to_owned())
            .unwrap_or_else(|| utf8(type_node, src).to_owned()),
        // generic_type: `List[T]` is named `List`
        "generic_type" => type_node
            .child_by_field_name("type")
            .map(|n| embedded_name(n, src))
            .unwrap_or_else(|| utf8(type_node, src).to_owned()),
        _ => utf8(type_node, src).to_owned(),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn text<'a>(node: Node<'_>, content: &'a str) -> &'a str {
    &content[node.byte_range()]
}

fn utf8<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or_default()
}

/// Content of a Go string literal: backquoted raw strings verbatim,
/// double-quoted strings with their escapes resolved.
fn tag_content(literal: &str) -> String {
    if let Some(raw) = literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        return raw.to_owned();
    }
    let Some(quoted) = literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return literal.to_owned();
    };
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
