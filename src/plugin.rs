use crate::error::InjectionError;
use fontinject_traits::FontFaceResolver;
use fontinject_transform::{InjectionOrder, TransformOptions, TransformOutput, transform_with_options};
use log::debug;
use regex::Regex;
use std::sync::{Arc, LazyLock};

pub const PLUGIN_NAME: &str = "fontinject:font-family-injection";

/// Module ids the plugin transforms: stylesheets, optionally with a query.
static STYLESHEET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(css|scss|sass|postcss|pcss|less|stylus|styl)(\?[^.]+)?$")
        .expect("BUG: invalid STYLESHEET_ID regex literal")
});

/// Host-facing wrapper around the transform engine.
///
/// The host asks [`transform_include`](Self::transform_include) whether a
/// module is a stylesheet and, if so, hands its text to
/// [`transform`](Self::transform).
pub struct FontFamilyInjectionPlugin<R> {
    resolver: Arc<R>,
    order: InjectionOrder,
}

impl<R> FontFamilyInjectionPlugin<R>
where
    R: FontFaceResolver + 'static,
{
    pub fn new(resolver: R) -> Self {
        Self::from_shared(Arc::new(resolver))
    }

    /// Creates a plugin around a resolver shared with other owners.
    pub fn from_shared(resolver: Arc<R>) -> Self {
        Self {
            resolver,
            order: InjectionOrder::default(),
        }
    }

    pub fn with_order(mut self, order: InjectionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn transform_include(&self, id: &str) -> bool {
        STYLESHEET_ID.is_match(id)
    }

    /// Transforms one stylesheet module. `id` becomes the map's source name.
    pub async fn transform(
        &self,
        code: &str,
        id: &str,
    ) -> Result<Option<TransformOutput>, InjectionError> {
        let options = TransformOptions {
            source_name: Some(id.to_string()),
            order: self.order,
        };
        let output = transform_with_options(code, Arc::clone(&self.resolver), &options).await?;
        if output.is_none() {
            debug!("{}: no font faces injected", id);
        }
        Ok(output)
    }
}
