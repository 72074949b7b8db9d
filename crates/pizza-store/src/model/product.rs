use serde::{Deserialize, Serialize};

/// One orderable item of the catalog.
///
/// Products are authored with their ids and loaded once at startup; nothing in
/// the store mutates or removes them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub unit_price: f64,
    /// `true` when the kitchen cannot currently make this product.
    pub sold_out: bool,
    pub ingredients: Vec<String>,
    pub image_url: String,
}

impl Product {
    /// Creates an available product.
    ///
    /// # Arguments
    /// * `id` - Catalog id, unique within the menu
    /// * `name` - Display name
    /// * `unit_price` - Price of a single unit
    /// * `ingredients` - Ingredient names, in display order
    /// * `image_url` - Reference to the product picture
    pub fn new(
        id: u32,
        name: impl Into<String>,
        unit_price: f64,
        ingredients: &[&str],
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            sold_out: false,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            image_url: image_url.into(),
        }
    }
}
