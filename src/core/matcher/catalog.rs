//! Product catalog consulted by the matcher

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// The fixed set of storefront product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Neural Tech")]
    NeuralTech,
    #[serde(rename = "Quantum Computing")]
    QuantumComputing,
    #[serde(rename = "Cybernetics")]
    Cybernetics,
    #[serde(rename = "Biotech")]
    Biotech,
    #[serde(rename = "Holographic Systems")]
    HolographicSystems,
    #[serde(rename = "Space Tech")]
    SpaceTech,
    #[serde(rename = "AR/VR")]
    ArVr,
    #[serde(rename = "Robotics")]
    Robotics,
    #[serde(rename = "Energy Systems")]
    EnergySystems,
    #[serde(rename = "Smart Materials")]
    SmartMaterials,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::NeuralTech,
        ProductCategory::QuantumComputing,
        ProductCategory::Cybernetics,
        ProductCategory::Biotech,
        ProductCategory::HolographicSystems,
        ProductCategory::SpaceTech,
        ProductCategory::ArVr,
        ProductCategory::Robotics,
        ProductCategory::EnergySystems,
        ProductCategory::SmartMaterials,
    ];

    /// Display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            ProductCategory::NeuralTech => "Neural Tech",
            ProductCategory::QuantumComputing => "Quantum Computing",
            ProductCategory::Cybernetics => "Cybernetics",
            ProductCategory::Biotech => "Biotech",
            ProductCategory::HolographicSystems => "Holographic Systems",
            ProductCategory::SpaceTech => "Space Tech",
            ProductCategory::ArVr => "AR/VR",
            ProductCategory::Robotics => "Robotics",
            ProductCategory::EnergySystems => "Energy Systems",
            ProductCategory::SmartMaterials => "Smart Materials",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown product category: {}", wanted))
    }
}

/// One product the assistant may recommend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
}

/// Inclusive price bounds from the shopper's preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Ordered product list; order is the tie-break for ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Load a catalog from a JSON array of items
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::Config(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        info!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items within the price range and categories, in catalog order
    ///
    /// An absent range or an empty category list does not filter.
    pub fn filter_by_preferences(
        &self,
        price_range: Option<PriceRange>,
        categories: &[ProductCategory],
    ) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|item| price_range.is_none_or(|range| range.contains(item.price)))
            .filter(|item| categories.is_empty() || categories.contains(&item.category))
            .cloned()
            .collect()
    }
}
