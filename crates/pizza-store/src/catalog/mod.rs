//! # Catalog
//!
//! The fixed menu of orderable products. A [`Catalog`] is built once at
//! startup, either from the built-in menu or from a JSON file, and is only read
//! afterwards.
//!
//! ```rust
//! use pizza_store::catalog::Catalog;
//!
//! let catalog = Catalog::pizzas();
//! assert_eq!(catalog.list_products()[0].name, "Margherita");
//! ```

pub mod error;
mod menu;

pub use error::*;

use crate::model::Product;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Immutable, insertion-ordered list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in six-pizza menu.
    pub fn pizzas() -> Self {
        Self::new(menu::pizzas())
    }

    /// Loads a catalog from a JSON array of products.
    ///
    /// # Errors
    /// - [`CatalogError::Io`] when the file cannot be read
    /// - [`CatalogError::Parse`] when it is not a product array
    /// - [`CatalogError::Invalid`] on a duplicate id or a non-positive price
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        validate(&products)?;

        info!(path = %path.display(), products = products.len(), "Catalog loaded");
        Ok(Self::new(products))
    }

    /// The full catalog in authoring order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::Invalid(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if product.unit_price.is_nan() || product.unit_price <= 0.0 {
            return Err(CatalogError::Invalid(format!(
                "product {} has non-positive unit price {}",
                product.id, product.unit_price
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_menu(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_menu_keeps_authoring_order() {
        let catalog = Catalog::pizzas();
        let names: Vec<&str> = catalog
            .list_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Margherita",
                "Pepperoni",
                "Hawaiian",
                "Vegetarian",
                "BBQ Chicken",
                "Supreme"
            ]
        );
        let ids: Vec<u32> = catalog.list_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_builtin_menu_is_valid() {
        let catalog = Catalog::pizzas();
        assert!(validate(catalog.list_products()).is_ok());
        assert!(catalog.list_products().iter().all(|p| !p.sold_out));
    }

    #[test]
    fn test_from_path_reads_camel_case_products() {
        let file = write_menu(
            r#"[{"id": 7, "name": "Marinara", "unitPrice": 9.5, "soldOut": true,
                 "ingredients": ["tomato", "garlic"], "imageUrl": "marinara.jpg"}]"#,
        );

        let catalog = Catalog::from_path(file.path()).unwrap();
        let products = catalog.list_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Marinara");
        assert_eq!(products[0].unit_price, 9.5);
        assert!(products[0].sold_out);
    }

    #[test]
    fn test_from_path_rejects_duplicate_ids() {
        let file = write_menu(
            r#"[{"id": 1, "name": "A", "unitPrice": 1, "soldOut": false, "ingredients": [], "imageUrl": ""},
                {"id": 1, "name": "B", "unitPrice": 2, "soldOut": false, "ingredients": [], "imageUrl": ""}]"#,
        );

        let result = Catalog::from_path(file.path());
        assert!(matches!(result, Err(CatalogError::Invalid(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_from_path_rejects_free_products() {
        let file = write_menu(
            r#"[{"id": 1, "name": "A", "unitPrice": 0, "soldOut": false, "ingredients": [], "imageUrl": ""}]"#,
        );

        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_path_reports_parse_and_io_errors() {
        let file = write_menu(r#"{"not": "a list"}"#);
        assert!(matches!(
            Catalog::from_path(file.path()),
            Err(CatalogError::Parse(_))
        ));

        assert!(matches!(
            Catalog::from_path("/definitely/not/here/menu.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}
