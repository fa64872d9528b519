use std::{fmt, str::FromStr};

use thiserror::Error;

/// A user action submitted to the [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddToCart { name: String },
    Increment { name: String },
    Decrement { name: String },
    Remove { name: String },
    ConfirmOrder,
    StartNewOrder,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::Increment { .. } => "increment",
            Intent::Decrement { .. } => "decrement",
            Intent::Remove { .. } => "remove",
            Intent::ConfirmOrder => "confirm_order",
            Intent::StartNewOrder => "start_new_order",
        }
    }

    pub fn item_name(&self) -> Option<&str> {
        match self {
            Intent::AddToCart { name }
            | Intent::Increment { name }
            | Intent::Decrement { name }
            | Intent::Remove { name } => Some(name),
            Intent::ConfirmOrder | Intent::StartNewOrder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("unknown intent '{0}'; expected add:, inc:, dec:, remove:, confirm or new-order")]
    UnknownKind(String),
    #[error("intent '{0}' needs an item name after the colon")]
    MissingName(String),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "confirm" => return Ok(Intent::ConfirmOrder),
            "new-order" | "new" => return Ok(Intent::StartNewOrder),
            _ => {}
        }

        let Some((kind, name)) = raw.split_once(':') else {
            return Err(IntentParseError::UnknownKind(raw.to_string()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(IntentParseError::MissingName(raw.to_string()));
        }
        let name = name.to_string();

        match kind.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Intent::AddToCart { name }),
            "inc" => Ok(Intent::Increment { name }),
            "dec" => Ok(Intent::Decrement { name }),
            "remove" | "rm" => Ok(Intent::Remove { name }),
            _ => Err(IntentParseError::UnknownKind(raw.to_string())),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::AddToCart { name } => write!(f, "add:{name}"),
            Intent::Increment { name } => write!(f, "inc:{name}"),
            Intent::Decrement { name } => write!(f, "dec:{name}"),
            Intent::Remove { name } => write!(f, "remove:{name}"),
            Intent::ConfirmOrder => f.write_str("confirm"),
            Intent::StartNewOrder => f.write_str("new-order"),
        }
    }
}
