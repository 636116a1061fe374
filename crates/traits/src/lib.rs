pub mod resolver;

pub use resolver::{FontFaceResolver, ResolveError, ResolveResult, StaticFontResolver};
