//! Test fixtures and data factories

use storefront_ai::core::matcher::{Catalog, CatalogItem, ProductCategory};

/// Factory for catalog items
pub struct CatalogFactory;

impl CatalogFactory {
    pub fn item(id: &str, name: &str, category: ProductCategory, price: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} for the discerning shopper", name),
            category,
            tags: Vec::new(),
            price,
            stock: 5,
        }
    }

    pub fn tagged(mut item: CatalogItem, tags: &[&str]) -> CatalogItem {
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        item
    }

    /// Small mixed catalog used across the integration tests
    pub fn storefront() -> Catalog {
        Catalog::new(vec![
            Self::tagged(
                Self::item("visor", "Immersion Visor", ProductCategory::ArVr, 899.0),
                &["vr", "headset"],
            ),
            Self::tagged(
                Self::item("band", "BioSync Band", ProductCategory::Biotech, 349.0),
                &["bio", "fitness"],
            ),
            Self::tagged(
                Self::item("core", "Quantum Core", ProductCategory::QuantumComputing, 8999.0),
                &["quantum"],
            ),
            Self::tagged(
                Self::item("helper", "Helper Robot", ProductCategory::Robotics, 3299.0),
                &["robot", "home"],
            ),
        ])
    }
}

/// Product reply as a provider would send it
pub fn product_json(name: &str, price: f64, category: &str, stock: i64) -> String {
    serde_json::json!({
        "name": name,
        "description": format!("{} with adaptive firmware", name),
        "price": price,
        "category": category,
        "stock": stock,
        "tags": ["future", "gadget"],
    })
    .to_string()
}
