// Shared fixtures for the collection integration tests
#![allow(dead_code)]

use serde::Serialize;
use trove::Collection;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub amount: i64,
}

impl Item {
    pub fn new(title: &str, amount: i64) -> Self {
        Self {
            title: title.to_string(),
            amount,
        }
    }
}

pub type ItemCollection = Collection<Item>;

/// Four products keyed by their number, in insertion order.
pub fn products() -> Vec<(&'static str, Item)> {
    vec![
        ("1.1", Item::new("product 1.1", 1)),
        ("1.2", Item::new("product 1.2", 2)),
        ("2.1", Item::new("product 2.1", 3)),
        ("2.2", Item::new("product 2.2", 4)),
    ]
}

pub fn product(key: &str) -> Item {
    products()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, item)| item)
        .unwrap_or_else(|| panic!("no product {key}"))
}

pub fn product_values() -> Vec<Item> {
    products().into_iter().map(|(_, item)| item).collect()
}

/// A collection filled one `add` at a time.
pub fn eager_collection() -> ItemCollection {
    let mut collection = ItemCollection::new();
    for item in product_values() {
        collection.add(item).unwrap();
    }
    collection
}

/// A collection whose keyed loader returns the products.
pub fn lazy_collection() -> ItemCollection {
    let mut collection = ItemCollection::new();
    collection.set_keyed_loader(products);
    collection
}
