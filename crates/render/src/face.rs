use crate::source::{normalize_entry, render_source};
use fontinject_types::{FontFaceData, FontFaces, FontSource};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn render_block(family: &str, face: &FontFaceData) -> String {
    let sources: Vec<FontSource> = face.src.iter().map(normalize_entry).collect();

    let mut lines = vec![
        "@font-face {".to_string(),
        format!("  font-family: '{family}';"),
        format!("  src: {};", render_source(&sources)),
        format!("  font-display: {};", face.display.unwrap_or_default()),
    ];

    let optional = [
        ("unicode-range", &face.unicode_range),
        ("font-weight", &face.weight),
        ("font-style", &face.style),
        ("font-feature-settings", &face.feature_settings),
        ("font-variation-settings", &face.variation_settings),
    ];
    for (property, value) in optional {
        if let Some(value) = non_empty(value) {
            lines.push(format!("  {property}: {value};"));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Renders one `@font-face` block per face.
///
/// The family is always single-quoted. `font-display` falls back to `swap`;
/// the remaining descriptors are only written when set and non-empty.
pub fn render_font_face(family: &str, faces: &FontFaces) -> Vec<String> {
    faces.iter().map(|face| render_block(family, face)).collect()
}
