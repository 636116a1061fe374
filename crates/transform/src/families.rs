use fontinject_css::{Declaration, DeclarationValue, ValueToken};

/// Generic family keywords and CSS-wide values. These never name a resolvable
/// font.
pub const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
    "inherit",
    "initial",
    "revert",
    "revert-layer",
    "unset",
];

pub fn is_generic_family(name: &str) -> bool {
    GENERIC_FAMILIES.contains(&name)
}

/// Family names referenced by a `font-family` declaration, in source order.
///
/// Quoted strings always count. Identifiers count unless they are generic,
/// and adjacent identifiers are separate names. A raw value is taken whole.
pub fn extract_font_families(declaration: &Declaration) -> Vec<String> {
    match &declaration.value {
        DeclarationValue::Raw(raw) if raw.is_empty() => Vec::new(),
        DeclarationValue::Raw(raw) => vec![raw.clone()],
        DeclarationValue::Tokens(tokens) => tokens
            .iter()
            .filter_map(|token| match token {
                ValueToken::Identifier(name) if !is_generic_family(name) => Some(name.clone()),
                ValueToken::String(name) => Some(name.clone()),
                _ => None,
            })
            .collect(),
    }
}
