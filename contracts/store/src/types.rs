use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the store contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Administrator and payment token, fixed at construction
    Config,
    /// Last product ID handed out
    ProductCounter,
    /// Total value held in custody for active purchases
    Custody,
    /// Product data by ID
    Product(u64),
    /// Product ID by name
    ProductName(String),
    /// Purchase record by (buyer, product ID)
    Purchase(Address, u64),
}

/// Immutable store configuration written by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreConfig {
    /// The only address allowed to mutate the catalog
    pub admin: Address,
    /// SEP-41 token used for payments and refunds
    pub token: Address,
}

/// Catalog entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Unique product name
    pub name: String,
    /// Units in stock
    pub quantity: u64,
}

/// A buyer's purchase of one unit of a product.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseRecord {
    pub buyer: Address,
    pub product_id: u64,
    /// Ledger sequence at which the purchase was made
    pub purchase_tick: u32,
    /// Amount captured from the buyer, returned in full on refund
    pub amount: i128,
    /// False once refunded
    pub active: bool,
}

/// Ledgers after purchase during which a refund is still accepted
pub const REFUND_WINDOW: u32 = 100;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
