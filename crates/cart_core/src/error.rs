use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("no catalog item named '{name}'")]
    UnknownItem { name: String },
    #[error("cannot confirm an order with an empty cart")]
    EmptyOrder,
    #[error("an order confirmation is open; start a new order first")]
    OrderPending,
}
