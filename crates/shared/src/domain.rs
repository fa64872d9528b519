use serde::{Deserialize, Serialize};

/// Exact decimal amount in dollars. Never stored as binary floating point.
pub type Price = rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImage {
    pub thumbnail: String,
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

/// A purchasable catalog entry. `name` is the unique key used by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub image: ItemImage,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Price) -> Self {
        let name = name.into();
        let slug = slug(&name);
        Self {
            name,
            category: category.into(),
            price,
            image: ItemImage {
                thumbnail: format!("./assets/images/image-{slug}-thumbnail.jpg"),
                mobile: format!("./assets/images/image-{slug}-mobile.jpg"),
                tablet: format!("./assets/images/image-{slug}-tablet.jpg"),
                desktop: format!("./assets/images/image-{slug}-desktop.jpg"),
            },
        }
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
