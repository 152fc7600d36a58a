//! Component registry: an explicit, constructed catalog of descriptors.
//!
//! A [`Registry`] is populated once (defaults and/or a catalog file) and then
//! shared read-only by the generator, the documentation renderer and the tool
//! boundary.

/// Default catalog of its-just-ui components.
pub mod defaults;
/// Descriptor and catalog file types.
pub mod types;

pub use types::{CatalogFile, Category, ComponentDescriptor, PropSpec, ValueKind};

use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

/// Sentinel category that selects every descriptor.
pub const ALL_CATEGORIES: &str = "all";

/// Errors emitted while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// YAML/JSON failed to parse or did not match the catalog shape.
    #[error("Catalog parse error: {0}")]
    Parse(String),
}

/// In-memory catalog keyed by component name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: IndexMap<String, ComponentDescriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the default catalog.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for descriptor in defaults::default_catalog() {
            registry.register(descriptor);
        }
        registry
    }

    /// Inserts a descriptor under its name, replacing any previous entry.
    ///
    /// Descriptors are trusted initialization data and are not validated.
    pub fn register(&mut self, descriptor: ComponentDescriptor) {
        if self.components.contains_key(&descriptor.name) {
            log::debug!("Replacing registered component {}", descriptor.name);
        }
        self.components.insert(descriptor.name.clone(), descriptor);
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    /// Returns true when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Groups component names by category.
    ///
    /// `None`, `""` or `"all"` includes every descriptor; any other value keeps only
    /// descriptors whose category tag equals it. Categories appear in the order
    /// their first member was registered, names in registration order.
    pub fn list_by_category(&self, category: Option<&str>) -> IndexMap<Category, Vec<String>> {
        let filter = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        let mut grouped: IndexMap<Category, Vec<String>> = IndexMap::new();
        for descriptor in self.components.values() {
            if let Some(wanted) = filter
                && descriptor.category.as_str() != wanted
            {
                continue;
            }
            grouped
                .entry(descriptor.category)
                .or_default()
                .push(descriptor.name.clone());
        }
        grouped
    }

    /// Snapshot of every descriptor in registration order.
    pub fn all_descriptors(&self) -> Vec<&ComponentDescriptor> {
        self.components.values().collect()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Registers every descriptor of a catalog, in file order.
    pub fn extend(&mut self, catalog: CatalogFile) {
        for descriptor in catalog.components {
            self.register(descriptor);
        }
    }

    /// Parses catalog text (YAML or JSON) and registers its descriptors.
    ///
    /// Returns the number of descriptors read.
    pub fn load_catalog_str(&mut self, source: &str) -> Result<usize, CatalogError> {
        let catalog = parse_catalog(source)?;
        let count = catalog.components.len();
        self.extend(catalog);
        Ok(count)
    }

    /// Reads a catalog file and registers its descriptors.
    pub fn load_catalog_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let count = self.load_catalog_str(&source)?;
        log::info!("Loaded {} components from {}", count, path.display());
        Ok(count)
    }
}

/// Parses catalog text. JSON input is accepted since it is valid YAML.
pub fn parse_catalog(source: &str) -> Result<CatalogFile, CatalogError> {
    if source.trim().is_empty() {
        return Ok(CatalogFile::default());
    }
    serde_yaml::from_str(source).map_err(|err| CatalogError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[String]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let registry = Registry::with_defaults();
        assert!(registry.lookup("Button").is_some());
        assert!(registry.lookup("button").is_none());
        assert!(registry.lookup("Butto").is_none());
        assert!(registry.lookup("NotRegistered").is_none());
    }

    #[test]
    fn list_all_groups_by_category_in_registration_order() {
        let registry = Registry::with_defaults();
        let all = registry.list_by_category(None);
        assert_eq!(all, registry.list_by_category(Some("all")));
        assert_eq!(all, registry.list_by_category(Some("")));

        let categories: Vec<&str> = all.keys().map(|c| c.as_str()).collect();
        assert_eq!(
            categories,
            vec!["core", "form", "data-display", "feedback", "layout"]
        );
        assert_eq!(
            names(&all[&Category::Core]),
            vec!["Button", "Badge", "Chip", "ThemeProvider"]
        );
        assert_eq!(
            names(&all[&Category::Form]),
            vec!["Input", "Select", "Checkbox"]
        );
    }

    #[test]
    fn list_single_category() {
        let registry = Registry::with_defaults();
        let form = registry.list_by_category(Some("form"));
        assert_eq!(form.len(), 1);
        assert_eq!(
            names(&form[&Category::Form]),
            vec!["Input", "Select", "Checkbox"]
        );

        assert!(registry.list_by_category(Some("navigation")).is_empty());
        assert!(registry.list_by_category(Some("unknown")).is_empty());
    }

    #[test]
    fn register_overwrites_in_place() {
        let mut registry = Registry::with_defaults();
        let mut badge = registry.lookup("Badge").cloned().unwrap();
        badge.description = "Replaced".to_string();
        registry.register(badge);

        assert_eq!(registry.len(), 11);
        assert_eq!(registry.lookup("Badge").unwrap().description, "Replaced");
        assert_eq!(registry.names().nth(1), Some("Badge"));
    }

    #[test]
    fn all_descriptors_follow_registration_order() {
        let registry = Registry::with_defaults();
        let snapshot: Vec<&str> = registry
            .all_descriptors()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(snapshot, defaults::default_component_names());
    }

    #[test]
    fn loads_yaml_catalog() {
        let mut registry = Registry::new();
        let yaml = r#"
components:
  - name: Tabs
    category: navigation
    description: Tabbed navigation
    props:
      defaultValue:
        type: string
        description: Initially selected tab
      orientation:
        type: string
        default: horizontal
        options: [horizontal, vertical]
    examples:
      - '<Tabs defaultValue="one" />'
    accessibility:
      - ARIA tablist
"#;
        assert_eq!(registry.load_catalog_str(yaml).unwrap(), 1);
        let tabs = registry.lookup("Tabs").unwrap();
        assert_eq!(tabs.category, Category::Navigation);
        assert_eq!(
            tabs.props.keys().collect::<Vec<_>>(),
            vec!["defaultValue", "orientation"]
        );
        assert_eq!(tabs.props["orientation"].default, Some("horizontal".into()));
    }

    #[test]
    fn loads_json_catalog() {
        let mut registry = Registry::new();
        let json = r#"{"components": [{"name": "Toast", "category": "feedback"}]}"#;
        assert_eq!(registry.load_catalog_str(json).unwrap(), 1);
        let toast = registry.lookup("Toast").unwrap();
        assert!(toast.props.is_empty());
        assert!(toast.examples.is_empty());
    }

    #[test]
    fn rejects_malformed_catalog() {
        let mut registry = Registry::new();
        let err = registry
            .load_catalog_str("components:\n  - name: Broken\n    category: nowhere\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let mut registry = Registry::new();
        assert_eq!(registry.load_catalog_str("  \n").unwrap(), 0);
    }

    #[test]
    fn missing_catalog_file_is_io_error() {
        let mut registry = Registry::new();
        let err = registry
            .load_catalog_file(Path::new("/definitely/not/here.yaml"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
