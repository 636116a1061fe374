//! Value objects describing where a font's bytes come from and how a single
//! `@font-face` rule should look.
//!
//! These types are produced by resolvers and consumed by the renderer; nothing
//! here mutates after construction.

pub mod face;
pub mod source;

pub use face::{FontDisplay, FontFaceData, FontFaces};
pub use source::{FontSource, OneOrMany, SourceEntry};
