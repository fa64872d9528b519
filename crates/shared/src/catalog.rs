use std::{collections::HashSet, fs, path::Path};

use rust_decimal::Decimal;

use crate::{
    domain::{Item, Price},
    error::CatalogError,
};

/// Upper bound on a single item's price; keeps cart totals well inside
/// the range of [`Decimal`] for any reachable quantity.
pub const MAX_PRICE: Price = Decimal::from_parts(1_000_000, 0, 0, false, 0);

const DEFAULT_CATALOG_JSON: &str = include_str!("../data/desserts.json");

/// Immutable, ordered list of items. Order is the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// The dessert menu compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Loads `path` when given, otherwise the embedded menu.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate(items: &[Item]) -> Result<(), CatalogError> {
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::BlankName { index });
        }
        if item.name.trim() != item.name {
            return Err(CatalogError::UntrimmedName {
                name: item.name.clone(),
            });
        }
        if !seen.insert(item.name.as_str()) {
            return Err(CatalogError::DuplicateName {
                name: item.name.clone(),
            });
        }
        if item.price.is_sign_negative() && !item.price.is_zero() {
            return Err(CatalogError::NegativePrice {
                name: item.name.clone(),
                price: item.price,
            });
        }
        if item.price > MAX_PRICE {
            return Err(CatalogError::PriceTooHigh {
                name: item.name.clone(),
                price: item.price,
                max: MAX_PRICE,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
