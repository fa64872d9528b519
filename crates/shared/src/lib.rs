//! Catalog domain shared by the cart core and both storefront frontends.

pub mod catalog;
pub mod domain;
pub mod error;

pub use catalog::{Catalog, MAX_PRICE};
pub use domain::{Item, ItemImage, Price};
pub use error::CatalogError;
