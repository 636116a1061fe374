//! FontFaceResolver trait for abstracting font-family lookup.
//!
//! The transform engine asks a resolver which `@font-face` descriptors back a
//! family name. Where the answer comes from (a remote registry, a directory of
//! font files, a static table) is up to the implementation.

use fontinject_types::FontFaces;
use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::RwLock;
use thiserror::Error;

/// Error type for family resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Font family not found: {0}")]
    NotFound(String),

    #[error("Failed to resolve font family '{family}': {message}")]
    Failed { family: String, message: String },

    #[error("Resolver error: {0}")]
    Other(String),
}

/// Outcome of resolving one family. `Ok(None)` means nothing should be
/// injected for it, which is not an error.
pub type ResolveResult = Result<Option<FontFaces>, ResolveError>;

/// A trait for looking up the font faces behind a family name.
///
/// Resolvers are called concurrently for distinct families within one
/// transform, so implementations must be `Send + Sync`, and the returned
/// future must be `Send`.
///
/// # Implementations
///
/// - `StaticFontResolver`: serves faces from a pre-populated table
/// - Any `Fn(String) -> impl Future<Output = ResolveResult>` closure
///
/// # Example
///
/// ```ignore
/// let resolver = |family: String| async move {
///     Ok(Some(FontFaceData::new(format!("/fonts/{family}.woff2")).into()))
/// };
/// let faces = resolver.resolve("Inter").await?;
/// ```
pub trait FontFaceResolver: Send + Sync {
    /// Resolve `family` to the faces that should be declared for it.
    fn resolve(&self, family: &str) -> impl Future<Output = ResolveResult> + Send;
}

impl<F, Fut> FontFaceResolver for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ResolveResult> + Send,
{
    fn resolve(&self, family: &str) -> impl Future<Output = ResolveResult> + Send {
        self(family.to_string())
    }
}

/// A resolver backed by an in-memory family table.
///
/// Families must be added before use. Lookups are exact and case-sensitive,
/// matching how family names are compared inside one stylesheet.
#[derive(Debug, Default)]
pub struct StaticFontResolver {
    families: RwLock<HashMap<String, FontFaces>>,
}

impl StaticFontResolver {
    pub fn new() -> Self {
        Self {
            families: RwLock::new(HashMap::new()),
        }
    }

    /// Register the faces for a family, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Failed` if the internal lock is poisoned.
    pub fn add(&self, family: impl Into<String>, faces: impl Into<FontFaces>) -> Result<(), ResolveError> {
        let family = family.into();
        let mut families = self.families.write().map_err(|_| ResolveError::Failed {
            family: family.clone(),
            message: "family table lock poisoned".to_string(),
        })?;
        families.insert(family, faces.into());
        Ok(())
    }

    /// Remove a family from the table.
    ///
    /// Returns `None` if the lock is poisoned or the family isn't present.
    pub fn remove(&self, family: &str) -> Option<FontFaces> {
        self.families.write().ok()?.remove(family)
    }

    /// Check whether a family is registered.
    pub fn contains(&self, family: &str) -> bool {
        self.families
            .read()
            .map(|f| f.contains_key(family))
            .unwrap_or(false)
    }

    /// Number of registered families. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.families.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.families.read().map(|f| f.is_empty()).unwrap_or(true)
    }

    fn lookup(&self, family: &str) -> ResolveResult {
        let families = self.families.read().map_err(|_| ResolveError::Failed {
            family: family.to_string(),
            message: "family table lock poisoned".to_string(),
        })?;
        Ok(families.get(family).cloned())
    }
}

impl FontFaceResolver for StaticFontResolver {
    fn resolve(&self, family: &str) -> impl Future<Output = ResolveResult> + Send {
        ready(self.lookup(family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontinject_types::FontFaceData;

    #[tokio::test]
    async fn test_static_resolver_add_and_resolve() {
        let resolver = StaticFontResolver::new();
        resolver.add("Inter", FontFaceData::new("/inter.woff2")).unwrap();

        let faces = resolver.resolve("Inter").await.unwrap().unwrap();
        assert_eq!(faces.len(), 1);
    }

    #[tokio::test]
    async fn test_static_resolver_unknown_family_is_none() {
        let resolver = StaticFontResolver::new();
        assert_eq!(resolver.resolve("Missing").await, Ok(None));
    }

    #[tokio::test]
    async fn test_static_resolver_is_case_sensitive() {
        let resolver = StaticFontResolver::new();
        resolver.add("Inter", FontFaceData::new("/inter.woff2")).unwrap();
        assert_eq!(resolver.resolve("inter").await, Ok(None));
    }

    #[test]
    fn test_static_resolver_overwrite_and_remove() {
        let resolver = StaticFontResolver::new();
        resolver.add("A", FontFaceData::new("/a.ttf")).unwrap();
        resolver
            .add("A", vec![FontFaceData::new("/a.ttf"), FontFaceData::new("/a-bold.ttf")])
            .unwrap();
        assert_eq!(resolver.len(), 1);

        let removed = resolver.remove("A").unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!resolver.contains("A"));
        assert!(resolver.is_empty());
        assert!(resolver.remove("A").is_none());
    }

    #[tokio::test]
    async fn test_closure_resolver() {
        let resolver = |family: String| async move {
            if family == "Boom" {
                return Err(ResolveError::Failed {
                    family,
                    message: "registry offline".to_string(),
                });
            }
            Ok(Some(FontFaces::from(FontFaceData::new(format!(
                "/fonts/{family}.woff2"
            )))))
        };

        let faces = resolver.resolve("Inter").await.unwrap().unwrap();
        assert_eq!(faces.len(), 1);
        let err = resolver.resolve("Boom").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to resolve font family 'Boom': registry offline"
        );
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::NotFound("Inter".to_string());
        assert!(err.to_string().contains("Inter"));

        let err = ResolveError::Other("timeout".to_string());
        assert_eq!(err.to_string(), "Resolver error: timeout");
    }
}
