//! JSON configuration describing which faces back which families.
//!
//! ```json
//! {
//!   "order": "discovery",
//!   "families": [
//!     { "name": "Inter", "faces": { "src": "/fonts/inter.woff2", "weight": "100 900" } },
//!     { "name": "Roboto", "faces": [
//!       { "src": ["/fonts/roboto.woff2", { "name": "Roboto" }], "weight": 400 },
//!       { "src": "/fonts/roboto-bold.woff2", "weight": 700 }
//!     ] }
//!   ]
//! }
//! ```

use crate::error::InjectionError;
use fontinject_traits::StaticFontResolver;
use fontinject_transform::InjectionOrder;
use fontinject_types::FontFaces;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjectionConfig {
    #[serde(default)]
    pub families: Vec<FamilyConfig>,
    #[serde(default)]
    pub order: InjectionOrder,
}

/// The faces declared for one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub name: String,
    pub faces: FontFaces,
}

impl InjectionConfig {
    pub fn from_json(json: &str) -> Result<Self, InjectionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InjectionError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            InjectionError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }

    /// Builds a resolver serving the configured families.
    ///
    /// Rejects blank family names, families without faces, and families
    /// configured more than once.
    pub fn into_resolver(self) -> Result<StaticFontResolver, InjectionError> {
        let resolver = StaticFontResolver::new();
        let mut seen = HashSet::new();
        for family in self.families {
            let name = family.name.trim();
            if name.is_empty() {
                return Err(InjectionError::Config("family name must not be empty".into()));
            }
            if family.faces.is_empty() {
                return Err(InjectionError::Config(format!(
                    "family '{name}' has no faces"
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(InjectionError::Config(format!(
                    "family '{name}' is configured more than once"
                )));
            }
            debug!("Configured {} face(s) for '{}'", family.faces.len(), name);
            resolver
                .add(name, family.faces)
                .map_err(|e| InjectionError::Config(e.to_string()))?;
        }
        Ok(resolver)
    }
}
