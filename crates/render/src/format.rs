/// Font file extensions and the CSS `format()` token each one maps to.
const FORMAT_TABLE: [(&str, &str); 6] = [
    ("otf", "opentype"),
    ("woff", "woff"),
    ("woff2", "woff2"),
    ("ttf", "truetype"),
    ("eot", "embedded-opentype"),
    ("svg", "svg"),
];

/// Looks up the `format()` token for a file extension (without the dot).
pub fn extension_to_format(extension: &str) -> Option<&'static str> {
    FORMAT_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, format)| *format)
}

/// Looks up the file extension for a `format()` token.
///
/// The returned extension includes its leading dot, e.g. `.woff2`.
pub fn format_to_extension(format: &str) -> Option<String> {
    FORMAT_TABLE
        .iter()
        .find(|(_, fmt)| *fmt == format)
        .map(|(ext, _)| format!(".{ext}"))
}
