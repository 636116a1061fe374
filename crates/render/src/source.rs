use crate::format::extension_to_format;
use fontinject_types::{FontSource, SourceEntry};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// Leading `scheme:` of a URL, e.g. `data:`, `https://` or `file:///`.
static PROTOCOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\sA-Za-z0-9_\x00+.-]{2,}:").expect("BUG: invalid PROTOCOL_RE regex literal")
});

fn has_protocol(input: &str) -> bool {
    PROTOCOL_RE.is_match(input)
}

/// Extension of the last path segment, without the dot. Needs at least one
/// character before the dot, so `.woff` alone has no extension.
fn extension(path: &str) -> Option<&str> {
    let dot = path.rfind('.')?;
    let ext = &path[dot + 1..];
    if dot == 0 || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext)
}

/// Normalizes a shorthand source string.
///
/// Paths starting with `/` and anything carrying a URL scheme become
/// [`FontSource::Remote`], with the format inferred from the extension when it
/// is a known font extension. Everything else names a locally installed font.
pub fn normalize_source(raw: &str) -> FontSource {
    if raw.starts_with('/') || has_protocol(raw) {
        let format = extension(raw)
            .and_then(extension_to_format)
            .map(str::to_string);
        return FontSource::Remote {
            url: raw.to_string(),
            format,
            tech: None,
        };
    }

    FontSource::local(raw)
}

pub(crate) fn normalize_entry(entry: &SourceEntry) -> FontSource {
    match entry {
        SourceEntry::Shorthand(raw) => normalize_source(raw),
        SourceEntry::Source(source) => source.clone(),
    }
}

fn render_one(source: &FontSource) -> String {
    match source {
        FontSource::Remote { url, format, tech } => {
            let mut rendered = format!("url(\"{url}\")");
            if let Some(format) = format {
                rendered.push_str(&format!(" format({format})"));
            }
            if let Some(tech) = tech {
                rendered.push_str(&format!(" tech({tech})"));
            }
            rendered
        }
        FontSource::Local { name } => format!("local(\"{name}\")"),
    }
}

/// Renders the value of an `src` descriptor.
///
/// Order is preserved: it is the order in which the browser tries sources.
pub fn render_source(sources: &[FontSource]) -> String {
    sources.iter().map(render_one).join(", ")
}
