//! Source-descriptor renderer.
//!
//! Turns resolved font faces into `@font-face` rule text. Everything in here is
//! pure: no I/O, no async, and inputs are only borrowed.
//!
//! ```
//! use fontinject_render::render_font_face;
//! use fontinject_types::{FontFaceData, FontSource, SourceEntry};
//!
//! let face = FontFaceData::new(vec![
//!     SourceEntry::from(FontSource::remote("/a.woff2").with_format("woff2")),
//!     SourceEntry::from(FontSource::local("Fallback")),
//! ]);
//! let blocks = render_font_face("Foo", &face.into());
//! assert_eq!(
//!     blocks[0],
//!     "@font-face {\n  font-family: 'Foo';\n  src: url(\"/a.woff2\") format(woff2), local(\"Fallback\");\n  font-display: swap;\n}"
//! );
//! ```

mod face;
mod format;
mod source;

pub use face::render_font_face;
pub use format::{extension_to_format, format_to_extension};
pub use source::{normalize_source, render_source};
