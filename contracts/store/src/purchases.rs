use soroban_sdk::{log, Address, Env};

use crate::catalog::{return_unit, take_unit};
use crate::errors::Error;
use crate::events::{ProductPurchased, ProductRefunded};
use crate::payment;
use crate::storage::*;
use crate::types::{PurchaseRecord, REFUND_WINDOW};

/// Whether `buyer` currently holds an unrefunded purchase of `product_id`.
pub fn has_active_purchase(e: &Env, buyer: &Address, product_id: u64) -> bool {
    get_purchase(e, buyer, product_id)
        .map(|record| record.active)
        .unwrap_or(false)
}

/// Buy one unit of a product.
///
/// Checks run in a fixed order (existence, stock, duplicate purchase, then
/// the payment amount) so the reported error is deterministic. Stock and the purchase record are written
/// before the payment is pulled in; if the transfer fails the whole
/// invocation is rolled back.
pub fn buy_product(e: &Env, buyer: Address, product_id: u64, payment: i128) -> Result<(), Error> {
    buyer.require_auth();

    let mut product = get_product(e, product_id).ok_or(Error::NotFound)?;

    if product.quantity == 0 {
        return Err(Error::ZeroQuantity);
    }

    if has_active_purchase(e, &buyer, product_id) {
        return Err(Error::DuplicatePurchase);
    }

    if payment <= 0 {
        return Err(Error::InvalidPayment);
    }

    let tick = e.ledger().sequence();

    take_unit(e, &mut product)?;
    set_purchase(
        e,
        &PurchaseRecord {
            buyer: buyer.clone(),
            product_id,
            purchase_tick: tick,
            amount: payment,
            active: true,
        },
    );

    payment::capture(e, &buyer, payment)?;
    log!(e, "purchase", buyer.clone(), product_id, tick);

    ProductPurchased {
        buyer,
        product_id,
        amount: payment,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}

/// Refund the buyer's active purchase of a product.
///
/// The record is closed and the unit restocked before the payment leaves
/// custody, so any re-entry during the transfer already sees the refund.
pub fn refund_product(e: &Env, buyer: Address, product_id: u64) -> Result<(), Error> {
    buyer.require_auth();

    let mut record = get_purchase(e, &buyer, product_id)
        .filter(|record| record.active)
        .ok_or(Error::NoActivePurchase)?;

    let tick = e.ledger().sequence();
    if tick.saturating_sub(record.purchase_tick) > REFUND_WINDOW {
        return Err(Error::RefundWindowExpired);
    }

    record.active = false;
    set_purchase(e, &record);
    return_unit(e, product_id)?;

    payment::release(e, &buyer, record.amount)?;
    log!(e, "refund", buyer.clone(), product_id, tick);

    ProductRefunded {
        buyer,
        product_id,
        amount: record.amount,
    }
    .publish(e);

    extend_instance_ttl(e);
    Ok(())
}
