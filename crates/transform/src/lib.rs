//! Injects `@font-face` rules for font families a stylesheet uses but does
//! not declare.
//!
//! The engine parses the stylesheet, skips families that already have an
//! `@font-face` rule, resolves the rest concurrently through a
//! [`FontFaceResolver`](fontinject_traits::FontFaceResolver), and prepends the
//! rendered blocks. Unchanged input yields `Ok(None)`.

mod engine;
mod error;
pub mod families;
pub mod rewrite;
mod session;

pub use engine::{
    InjectionOrder, TransformOptions, TransformOutput, transform, transform_with_options,
};
pub use error::TransformError;
pub use families::{GENERIC_FAMILIES, extract_font_families};
pub use rewrite::{MapOptions, RewriteBuffer, SourceMap};
pub use session::TransformSession;
