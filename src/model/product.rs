//! Product schema for the catalog service.

use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Resource for Product {
    type Draft = NewProduct;

    const COLLECTION: &'static str = "products";
    const KIND: &'static str = "Product";
    const SERVICE: &'static str = "product-service";
    const TITLE: &'static str = "Product Service";

    fn id(&self) -> u64 {
        self.id
    }

    fn assign(draft: NewProduct, id: u64) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                name: "Laptop".into(),
                price: 999.99,
                category: "Electronics".into(),
            },
            Self {
                id: 2,
                name: "Book".into(),
                price: 29.99,
                category: "Education".into(),
            },
        ]
    }
}
