use soroban_sdk::{log, Address, Env, String, Vec};

use crate::access::require_admin;
use crate::errors::Error;
use crate::events::{ProductAdded, ProductUpdated};
use crate::storage::*;
use crate::types::Product;

/// Add a product, or reset the stock of an existing one with the same name.
///
/// Re-adding a name with its current quantity changes nothing and emits no
/// event. A different quantity replaces the stored one; it is never summed.
pub fn add_product(e: &Env, admin: Address, name: String, quantity: u64) -> Result<u64, Error> {
    require_admin(e, &admin)?;

    if name.is_empty() {
        return Err(Error::InvalidName);
    }

    if let Some(id) = get_product_id_by_name(e, &name) {
        let mut product = get_product(e, id).ok_or(Error::NotFound)?;
        if product.quantity == quantity {
            return Ok(id);
        }

        product.quantity = quantity;
        set_product(e, &product);
        log!(e, "product restocked", id, quantity);

        ProductUpdated {
            id,
            name: product.name,
            quantity,
        }
        .publish(e);

        extend_instance_ttl(e);
        return Ok(id);
    }

    let id = increment_product_counter(e);
    let product = Product {
        id,
        name: name.clone(),
        quantity,
    };
    set_product(e, &product);
    log!(e, "product added", id, quantity);

    ProductAdded { id, name, quantity }.publish(e);

    extend_instance_ttl(e);
    Ok(id)
}

/// Overwrite the stock of an existing product.
pub fn update_product_quantity(
    e: &Env,
    admin: Address,
    product_id: u64,
    quantity: u64,
) -> Result<(), Error> {
    require_admin(e, &admin)?;

    let mut product = get_product(e, product_id).ok_or(Error::NotFound)?;
    product.quantity = quantity;
    set_product(e, &product);

    ProductUpdated {
        id: product_id,
        name: product.name,
        quantity,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

pub fn product_by_id(e: &Env, product_id: u64) -> Result<Product, Error> {
    get_product(e, product_id).ok_or(Error::NotFound)
}

pub fn product_by_name(e: &Env, name: &String) -> Result<Product, Error> {
    let id = get_product_id_by_name(e, name).ok_or(Error::NotFound)?;
    get_product(e, id).ok_or(Error::NotFound)
}

/// Every product in ID order, which is insertion order.
pub fn all_products(e: &Env) -> Vec<Product> {
    let mut products = Vec::new(e);
    for id in 1..=get_product_counter(e) {
        if let Some(product) = get_product(e, id) {
            products.push_back(product);
        }
    }
    products
}

/// Take one unit out of stock.
pub(crate) fn take_unit(e: &Env, product: &mut Product) -> Result<(), Error> {
    product.quantity = product.quantity.checked_sub(1).ok_or(Error::ZeroQuantity)?;
    set_product(e, product);
    Ok(())
}

/// Put one unit back into stock.
pub(crate) fn return_unit(e: &Env, product_id: u64) -> Result<(), Error> {
    let mut product = get_product(e, product_id).ok_or(Error::NotFound)?;
    product.quantity = product.quantity.checked_add(1).ok_or(Error::StockOverflow)?;
    set_product(e, &product);
    Ok(())
}
