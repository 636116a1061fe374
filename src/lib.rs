//! Injects `@font-face` rules for the font families a stylesheet uses.
//!
//! This crate ties the workspace together: a host-facing
//! [`FontFamilyInjectionPlugin`], JSON configuration for a static family
//! table, and re-exports of the pieces most callers need.
//!
//! ```no_run
//! use fontinject::{FontFamilyInjectionPlugin, InjectionConfig};
//!
//! # async fn run() -> Result<(), fontinject::InjectionError> {
//! let config = InjectionConfig::from_file("fonts.json")?;
//! let order = config.order;
//! let plugin = FontFamilyInjectionPlugin::new(config.into_resolver()?).with_order(order);
//!
//! if plugin.transform_include("src/app.css") {
//!     if let Some(output) = plugin.transform("body { font-family: Inter }", "src/app.css").await? {
//!         println!("{}", output.code);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod plugin;

pub use config::{FamilyConfig, InjectionConfig};
pub use error::InjectionError;
pub use plugin::{FontFamilyInjectionPlugin, PLUGIN_NAME};

pub use fontinject_render::{
    extension_to_format, format_to_extension, normalize_source, render_font_face, render_source,
};
pub use fontinject_traits::{FontFaceResolver, ResolveError, ResolveResult, StaticFontResolver};
pub use fontinject_transform::{
    InjectionOrder, SourceMap, TransformError, TransformOptions, TransformOutput, transform,
    transform_with_options,
};
pub use fontinject_types::{FontDisplay, FontFaceData, FontFaces, FontSource, OneOrMany, SourceEntry};
