//! Struct tag interpretation: `json:"..."` naming directives and the
//! `bson:",inline"` embedding marker.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::decl::Field;

static JSON_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"json:\s*"(.*?)""#).expect("json directive pattern is valid")
});

static INLINE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"bson:\s*",inline""#).expect("inline directive pattern is valid")
});

/// What a tagged field contributes to its struct's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDirective<'a> {
    /// The directive content exactly as written between the quotes.
    pub raw: &'a str,
    /// Property name: first comma segment, or the field's primary name when empty.
    pub name: String,
    pub omit_empty: bool,
}

/// Returns `None` for untagged fields, tags without a json directive, and `json:"-"`.
pub fn json_directive(field: &Field) -> Option<JsonDirective<'_>> {
    let tag = field.raw_tag.as_deref()?;
    let raw = JSON_DIRECTIVE.captures(tag)?.get(1)?.as_str();
    if raw == "-" {
        return None;
    }
    let mut segments = raw.split(',');
    let name = match segments.next() {
        Some(first) if !first.is_empty() => first.to_owned(),
        _ => field.primary_name().to_owned(),
    };
    let omit_empty = segments.any(|s| s.contains("omitempty"));
    Some(JsonDirective { raw, name, omit_empty })
}

pub fn is_inline(field: &Field) -> bool {
    field.raw_tag.as_deref().is_some_and(|tag| INLINE_DIRECTIVE.is_match(tag))
}
