//! UI layer for the storefront window: app shell, panels, and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::StorefrontApp;
