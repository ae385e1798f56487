//! Installed font families.

use std::collections::BTreeSet;

/// Common sans-serif families, tried in order when the preferred family is
/// not installed.
pub const SANS_SERIF_FALLBACKS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
    "Segoe UI",
    "Cantarell",
];

/// Generic family name used when no known sans-serif family is installed.
pub const GENERIC_SANS_SERIF: &str = "Sans Serif";

/// Sorted, de-duplicated list of font family names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCatalog {
    families: Vec<String>,
}

impl FontCatalog {
    /// Scans the fonts installed on the host.
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let catalog = Self::from_families(
            db.faces()
                .flat_map(|face| face.families.iter().map(|(name, _)| name.clone())),
        );
        if catalog.is_empty() {
            tracing::warn!("No system fonts found, using the default font");
        } else {
            tracing::debug!("Found {} font families", catalog.len());
        }
        catalog
    }

    /// Builds a catalog from arbitrary names.
    pub fn from_families<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            families: families.into_iter().collect(),
        }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.binary_search_by(|f| f.as_str().cmp(family)).is_ok()
    }

    /// Picks the family to start with.
    ///
    /// Returns `preferred` if installed, otherwise the first installed
    /// fallback, otherwise [`GENERIC_SANS_SERIF`].
    pub fn resolve(&self, preferred: &str) -> String {
        if self.contains(preferred) {
            return preferred.to_string();
        }

        let resolved = SANS_SERIF_FALLBACKS
            .iter()
            .find(|name| self.contains(name))
            .copied()
            .unwrap_or(GENERIC_SANS_SERIF);

        tracing::info!("Font family '{}' not installed, using '{}'", preferred, resolved);
        resolved.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sorted_and_deduplicated() {
        let catalog = FontCatalog::from_families(["Noto Sans", "Arial", "Noto Sans", " ", "Courier"]);
        assert_eq!(catalog.families(), ["Arial", "Courier", "Noto Sans"]);
        assert!(catalog.contains("Courier"));
        assert!(!catalog.contains("Helvetica"));
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_resolve_preferred_family() {
        let catalog = FontCatalog::from_families(["Arial", "DejaVu Sans"]);
        assert_eq!(catalog.resolve("Arial"), "Arial");
    }

    #[test]
    fn test_resolve_falls_back() {
        let catalog = FontCatalog::from_families(["DejaVu Sans", "Liberation Sans", "Monospace"]);
        assert_eq!(catalog.resolve("Arial"), "Liberation Sans");

        let empty = FontCatalog::default();
        assert!(empty.is_empty());
        assert_eq!(empty.resolve("Arial"), GENERIC_SANS_SERIF);
    }
}
