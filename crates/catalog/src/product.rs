use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use wareflow_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price_cents: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price_cents,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[derive(Debug, Clone)]
struct Node {
    product: Product,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree keyed by product id.
///
/// Nodes live in a `Vec` arena and link to each other by index; the tree never
/// removes entries, so indices stay valid for the catalog's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product. Duplicate ids are rejected.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        if product.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        let new_index = self.nodes.len();
        let Some(mut cursor) = self.root else {
            self.nodes.push(Node {
                product,
                left: None,
                right: None,
            });
            self.root = Some(new_index);
            return Ok(());
        };

        loop {
            let node = &self.nodes[cursor];
            let slot = match product.id.cmp(&node.product.id) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    return Err(DomainError::duplicate("product", &product));
                }
            };

            match slot {
                Some(next) => cursor = next,
                None => {
                    let go_left = product.id < self.nodes[cursor].product.id;
                    self.nodes.push(Node {
                        product,
                        left: None,
                        right: None,
                    });
                    let parent = &mut self.nodes[cursor];
                    if go_left {
                        parent.left = Some(new_index);
                    } else {
                        parent.right = Some(new_index);
                    }
                    return Ok(());
                }
            }
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match id.cmp(&node.product.id) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.product),
            };
        }
        None
    }

    /// Products in ascending id order.
    pub fn in_order(&self) -> Vec<&Product> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = Vec::new();
        let mut cursor = self.root;

        while cursor.is_some() || !stack.is_empty() {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                out.push(&self.nodes[index].product);
                cursor = self.nodes[index].right;
            }
        }

        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
