use soroban_sdk::{Address, Env, String};

use crate::types::{
    Product, PurchaseRecord, StorageKey, StoreConfig, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INSTANCE STORAGE
// ============================================================================

/// Get store configuration
pub fn get_config(e: &Env) -> Option<StoreConfig> {
    e.storage().instance().get::<_, StoreConfig>(&StorageKey::Config)
}

/// Set store configuration. Only the constructor calls this.
pub fn set_config(e: &Env, config: &StoreConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

/// Number of products ever added; also the last assigned ID
pub fn get_product_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get::<_, u64>(&StorageKey::ProductCounter)
        .unwrap_or(0)
}

/// Allocate the next sequential product ID
pub fn increment_product_counter(e: &Env) -> u64 {
    let counter = get_product_counter(e) + 1;
    e.storage()
        .instance()
        .set(&StorageKey::ProductCounter, &counter);
    counter
}

/// Value currently held for active purchases
pub fn get_custody(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<_, i128>(&StorageKey::Custody)
        .unwrap_or(0)
}

pub fn set_custody(e: &Env, amount: i128) {
    e.storage().instance().set(&StorageKey::Custody, &amount);
}

/// Extend the TTL of instance storage.
/// Called internally during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// PRODUCT STORAGE
// ============================================================================

/// Get product by ID
pub fn get_product(e: &Env, product_id: u64) -> Option<Product> {
    let key = StorageKey::Product(product_id);
    let product = e.storage().persistent().get::<_, Product>(&key);
    if product.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    product
}

/// Set product and keep the name index pointing at it
pub fn set_product(e: &Env, product: &Product) {
    let key = StorageKey::Product(product.id);
    e.storage().persistent().set(&key, product);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);

    let name_key = StorageKey::ProductName(product.name.clone());
    e.storage().persistent().set(&name_key, &product.id);
    e.storage()
        .persistent()
        .extend_ttl(&name_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Look up a product ID by name
pub fn get_product_id_by_name(e: &Env, name: &String) -> Option<u64> {
    let key = StorageKey::ProductName(name.clone());
    let id = e.storage().persistent().get::<_, u64>(&key);
    if id.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    id
}

// ============================================================================
// PURCHASE STORAGE
// ============================================================================

/// Get the purchase record for a (buyer, product) pair
pub fn get_purchase(e: &Env, buyer: &Address, product_id: u64) -> Option<PurchaseRecord> {
    let key = StorageKey::Purchase(buyer.clone(), product_id);
    let record = e.storage().persistent().get::<_, PurchaseRecord>(&key);
    if record.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

/// Set the purchase record, replacing any earlier one for the same pair
pub fn set_purchase(e: &Env, record: &PurchaseRecord) {
    let key = StorageKey::Purchase(record.buyer.clone(), record.product_id);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
