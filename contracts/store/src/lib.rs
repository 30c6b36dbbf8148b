#![no_std]

//! # Store Contract
//!
//! Inventory-and-purchase ledger on Soroban. One administrator, fixed at
//! deployment, keeps a catalog of named products with stock counts. Anyone
//! can buy a single unit of a product by paying in the configured token, and
//! can get the payment back within [`REFUND_WINDOW`] ledgers.
//!
//! ## Modules
//!
//! - [`access`]    - administrator guard.
//! - [`catalog`]   - product add/update/lookup rules.
//! - [`purchases`] - per (buyer, product) buy/refund state machine.
//! - [`payment`]   - token capture and release with custody accounting.
//!
//! Every public function either commits all of its writes or, by returning
//! an [`Error`], none of them.

mod access;
mod catalog;
mod errors;
mod events;
mod payment;
mod purchases;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use crate::errors::Error;
pub use crate::events::{ProductAdded, ProductPurchased, ProductRefunded, ProductUpdated};
pub use crate::types::{Product, PurchaseRecord, StoreConfig, REFUND_WINDOW};

use crate::storage::{extend_instance_ttl, get_config, get_custody, get_product_counter, set_config};

#[contract]
pub struct Store;

#[contractimpl]
impl Store {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Deploy the store.
    ///
    /// # Arguments
    /// * `admin` - The only address allowed to change the catalog
    /// * `token` - SEP-41 token used for payments and refunds
    pub fn __constructor(e: &Env, admin: Address, token: Address) {
        set_config(e, &StoreConfig { admin, token });
        extend_instance_ttl(e);
    }

    /// Get the administrator address
    pub fn get_admin(e: &Env) -> Result<Address, Error> {
        get_config(e).map(|config| config.admin).ok_or(Error::NotFound)
    }

    /// Get the payment token address
    pub fn get_token(e: &Env) -> Result<Address, Error> {
        get_config(e).map(|config| config.token).ok_or(Error::NotFound)
    }

    // ========================================================================
    // CATALOG
    // ========================================================================

    /// Add a product or reset the stock of an existing one (admin only)
    ///
    /// # Returns
    /// * ID of the new or existing product
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If caller is not the administrator
    /// * `Error::InvalidName` - If `name` is empty
    pub fn add_product(e: &Env, admin: Address, name: String, quantity: u64) -> Result<u64, Error> {
        catalog::add_product(e, admin, name, quantity)
    }

    /// Overwrite a product's stock (admin only)
    ///
    /// # Errors
    /// * `Error::AccessDenied` - If caller is not the administrator
    /// * `Error::NotFound` - If no product has `product_id`
    pub fn update_product_quantity(
        e: &Env,
        admin: Address,
        product_id: u64,
        quantity: u64,
    ) -> Result<(), Error> {
        catalog::update_product_quantity(e, admin, product_id, quantity)
    }

    /// Get all products in the order they were added
    pub fn get_all_products(e: &Env) -> Vec<Product> {
        catalog::all_products(e)
    }

    pub fn get_product_by_name(e: &Env, name: String) -> Result<Product, Error> {
        catalog::product_by_name(e, &name)
    }

    pub fn get_product_by_id(e: &Env, product_id: u64) -> Result<Product, Error> {
        catalog::product_by_id(e, product_id)
    }

    /// Number of products in the catalog
    pub fn get_product_count(e: &Env) -> u64 {
        get_product_counter(e)
    }

    // ========================================================================
    // PURCHASES
    // ========================================================================

    /// Buy one unit of a product, paying `payment` in the store token
    ///
    /// # Errors
    /// * `Error::NotFound` - If the product does not exist
    /// * `Error::ZeroQuantity` - If the product is out of stock
    /// * `Error::DuplicatePurchase` - If `buyer` has not refunded an earlier purchase
    /// * `Error::InvalidPayment` - If `payment` is not positive
    /// * `Error::TransferFailed` - If the payment could not be taken
    pub fn buy_product(e: &Env, buyer: Address, product_id: u64, payment: i128) -> Result<(), Error> {
        purchases::buy_product(e, buyer, product_id, payment)
    }

    /// Return a purchased unit and get the payment back
    ///
    /// # Errors
    /// * `Error::NoActivePurchase` - If `buyer` holds no unrefunded purchase
    /// * `Error::RefundWindowExpired` - If more than `REFUND_WINDOW` ledgers passed
    /// * `Error::StockOverflow` - If restocking the unit would overflow the product's stock
    /// * `Error::TransferFailed` - If the payment could not be returned
    pub fn refund_product(e: &Env, buyer: Address, product_id: u64) -> Result<(), Error> {
        purchases::refund_product(e, buyer, product_id)
    }

    /// Get the latest purchase record for a buyer and product
    pub fn get_purchase(e: &Env, buyer: Address, product_id: u64) -> Result<PurchaseRecord, Error> {
        storage::get_purchase(e, &buyer, product_id).ok_or(Error::NotFound)
    }

    pub fn has_active_purchase(e: &Env, buyer: Address, product_id: u64) -> bool {
        purchases::has_active_purchase(e, &buyer, product_id)
    }

    /// Ledgers after purchase during which a refund is accepted
    pub fn refund_window() -> u32 {
        REFUND_WINDOW
    }

    /// Total payment currently held for unrefunded purchases
    pub fn get_custody_balance(e: &Env) -> i128 {
        get_custody(e)
    }
}
