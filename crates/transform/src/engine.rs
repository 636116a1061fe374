use crate::error::TransformError;
use crate::families::extract_font_families;
use crate::rewrite::{MapOptions, RewriteBuffer, SourceMap};
use crate::session::TransformSession;
use fontinject_css::{Stylesheet, parse_stylesheet};
use fontinject_render::render_font_face;
use fontinject_traits::{FontFaceResolver, ResolveResult};
use fontinject_types::FontFaces;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinSet;

const FONT_FAMILY: &str = "font-family";
const FONT_FACE: &str = "font-face";

/// Where injected blocks end up relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionOrder {
    /// Each block is prepended as soon as its family resolves.
    #[default]
    Completion,
    /// Blocks appear in the order their families were first seen.
    Discovery,
}

impl fmt::Display for InjectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionOrder::Completion => f.write_str("completion"),
            InjectionOrder::Discovery => f.write_str("discovery"),
        }
    }
}

impl FromStr for InjectionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "completion" => Ok(InjectionOrder::Completion),
            "discovery" => Ok(InjectionOrder::Discovery),
            other => Err(format!(
                "unknown injection order '{other}', expected 'completion' or 'discovery'"
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Recorded as the map's source name.
    pub source_name: Option<String>,
    pub order: InjectionOrder,
}

/// A rewritten stylesheet and the map back to its input.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    pub code: String,
    pub map: SourceMap,
}

/// Injects `@font-face` rules for the families `code` uses but does not declare.
///
/// Returns `Ok(None)` when nothing was injected.
pub async fn transform<R>(
    code: &str,
    resolver: Arc<R>,
) -> Result<Option<TransformOutput>, TransformError>
where
    R: FontFaceResolver + 'static,
{
    transform_with_options(code, resolver, &TransformOptions::default()).await
}

pub async fn transform_with_options<R>(
    code: &str,
    resolver: Arc<R>,
    options: &TransformOptions,
) -> Result<Option<TransformOutput>, TransformError>
where
    R: FontFaceResolver + 'static,
{
    if !code.contains("font-family:") {
        return Ok(None);
    }

    let stylesheet = parse_stylesheet(code)?;
    let mut session = TransformSession::new();
    collect_existing(&stylesheet, &mut session);

    let mut tasks: JoinSet<(usize, String, ResolveResult)> = JoinSet::new();
    let mut discovered = 0usize;
    stylesheet.walk_declarations(|declaration, context| {
        if declaration.property != FONT_FAMILY || context.in_at_rule(FONT_FACE) {
            return;
        }
        for family in extract_font_families(declaration) {
            if session.is_existing(&family) {
                debug!("Skipping '{}': declared by an existing @font-face", family);
                continue;
            }
            if !session.claim(&family) {
                continue;
            }
            debug!("Resolving font family '{}'", family);
            let index = discovered;
            discovered += 1;
            let resolver = Arc::clone(&resolver);
            tasks.spawn(async move {
                let result = resolver.resolve(&family).await;
                (index, family, result)
            });
        }
    });

    let mut buffer = RewriteBuffer::new(code);
    let mut settled = BTreeMap::new();
    // Returning early drops `tasks`, which aborts whatever is still running.
    while let Some(joined) = tasks.join_next().await {
        let (index, family, result) = joined?;
        let Some(faces) = result? else {
            debug!("No font faces for '{}'", family);
            continue;
        };
        if faces.is_empty() {
            warn!("Resolver returned an empty face list for '{}'", family);
            continue;
        }
        debug!("Resolved '{}' to {} face(s)", family, faces.len());
        match options.order {
            InjectionOrder::Completion => inject(&mut buffer, &mut session, &family, &faces),
            InjectionOrder::Discovery => {
                settled.insert(index, (family, faces));
            }
        }
    }

    if !settled.is_empty() {
        let mut chunk = String::new();
        for (family, faces) in settled.values() {
            for block in render_font_face(family, faces) {
                if session.record_injection(&block) {
                    chunk.push_str(&block);
                    chunk.push('\n');
                }
            }
        }
        if !chunk.is_empty() {
            buffer.prepend(&chunk);
        }
    }

    if !buffer.has_changed() {
        debug!(
            "Resolved {} family(ies), nothing to inject",
            session.processed_count()
        );
        return Ok(None);
    }

    info!(
        "Injected {} @font-face block(s) for {} family(ies)",
        session.injected_count(),
        session.processed_count()
    );
    let map = buffer.generate_map(MapOptions {
        source: options.source_name.clone(),
        file: None,
        include_content: true,
    });
    Ok(Some(TransformOutput {
        code: buffer.to_string(),
        map,
    }))
}

/// Families declared inside the stylesheet's own `@font-face` rules.
fn collect_existing(stylesheet: &Stylesheet, session: &mut TransformSession) {
    stylesheet.walk_declarations(|declaration, context| {
        if declaration.property == FONT_FAMILY && context.in_at_rule(FONT_FACE) {
            for family in extract_font_families(declaration) {
                session.mark_existing(family);
            }
        }
    });
}

fn inject(buffer: &mut RewriteBuffer, session: &mut TransformSession, family: &str, faces: &FontFaces) {
    for block in render_font_face(family, faces) {
        if session.record_injection(&block) {
            buffer.prepend(&format!("{block}\n"));
        }
    }
}
