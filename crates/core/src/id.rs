//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an admitted order (positive, assigned in admission order).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

/// Identifier of a stocked inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a location node in the warehouse graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

macro_rules! impl_numeric_newtype {
    ($t:ty, $repr:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: $repr) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$repr> for $t {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $repr {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<$repr>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_numeric_newtype!(OrderId, u64, "OrderId");
impl_numeric_newtype!(ItemId, u32, "ItemId");
impl_numeric_newtype!(ProductId, u32, "ProductId");
impl_numeric_newtype!(NodeId, u32, "NodeId");

impl OrderId {
    /// First id handed out by a fresh sequence.
    pub const FIRST: OrderId = OrderId(1);

    /// The id following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(" 101 ".parse::<ItemId>().unwrap(), ItemId::new(101));
        assert_eq!("7".parse::<NodeId>().unwrap(), NodeId::new(7));
    }

    #[test]
    fn rejects_non_numeric_input_with_type_name() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ItemId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
        assert!("-1".parse::<OrderId>().is_err());
    }

    #[test]
    fn order_ids_advance_from_one() {
        let first = OrderId::FIRST;
        assert_eq!(first.get(), 1);
        assert_eq!(first.next(), OrderId::new(2));
        assert!(first < first.next());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&NodeId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId::new(3));
    }
}
