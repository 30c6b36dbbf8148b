use soroban_sdk::{contractevent, Address, String};

/// Event emitted when a new product enters the catalog
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductAdded {
    #[topic]
    pub id: u64,
    pub name: String,
    pub quantity: u64,
}

/// Event emitted when the administrator overwrites a product's stock
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductUpdated {
    #[topic]
    pub id: u64,
    pub name: String,
    pub quantity: u64,
}

/// Event emitted when a buyer purchases one unit
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductPurchased {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub product_id: u64,
    pub amount: i128,
}

/// Event emitted when a purchase is refunded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRefunded {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub product_id: u64,
    pub amount: i128,
}
