use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Price;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no items")]
    Empty,
    #[error("catalog item at position {index} has a blank name")]
    BlankName { index: usize },
    #[error("catalog item name '{name}' has leading or trailing whitespace")]
    UntrimmedName { name: String },
    #[error("catalog item name '{name}' appears more than once")]
    DuplicateName { name: String },
    #[error("catalog item '{name}' has negative price {price}")]
    NegativePrice { name: String, price: Price },
    #[error("catalog item '{name}' has price {price} above the maximum of {max}")]
    PriceTooHigh {
        name: String,
        price: Price,
        max: Price,
    },
}
