//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;
use uigen_kit::{CatalogError, DEFAULT_PACKAGE, Registry};

/// Serves component generation tools to MCP clients on stdio.
#[derive(Debug, Clone, Parser)]
#[command(name = "uigen-server", version, about)]
pub struct Cli {
    /// YAML or JSON catalog adding or overriding components.
    #[arg(long, env = "UIGEN_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Start from an empty registry instead of the built-in catalog.
    #[arg(long)]
    pub no_defaults: bool,

    /// Package named in generated import statements.
    #[arg(long, env = "UIGEN_PACKAGE", default_value = DEFAULT_PACKAGE)]
    pub package: String,
}

impl Cli {
    /// Builds the registry described by the flags.
    pub fn build_registry(&self) -> Result<Registry, CatalogError> {
        let mut registry = if self.no_defaults {
            Registry::new()
        } else {
            Registry::with_defaults()
        };
        if let Some(path) = &self.catalog {
            registry.load_catalog_file(path)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["uigen-server"]).unwrap();
        assert_eq!(cli.package, DEFAULT_PACKAGE);
        assert!(!cli.no_defaults);
        assert_eq!(cli.build_registry().unwrap().len(), 11);
    }

    #[test]
    fn empty_registry() {
        let cli =
            Cli::try_parse_from(["uigen-server", "--no-defaults", "--package", "@acme/ui"])
                .unwrap();
        assert_eq!(cli.package, "@acme/ui");
        assert!(cli.build_registry().unwrap().is_empty());
    }

    #[test]
    fn catalog_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("uigen-catalog-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "components:\n  - name: Tabs\n    category: navigation\n    description: Tabs\n",
        )
        .unwrap();
        let path_arg = path.display().to_string();
        let cli = Cli::try_parse_from(["uigen-server", "--catalog", path_arg.as_str()]).unwrap();
        let registry = cli.build_registry();
        std::fs::remove_file(&path).ok();

        let registry = registry.unwrap();
        assert_eq!(registry.len(), 12);
        assert!(registry.contains("Tabs"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let cli =
            Cli::try_parse_from(["uigen-server", "--catalog", "/no/such/catalog.yaml"]).unwrap();
        assert!(matches!(cli.build_registry(), Err(CatalogError::Io { .. })));
    }
}
