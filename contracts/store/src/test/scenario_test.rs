use crate::test::{funded_buyer, seed_catalog, setup_test, PRICE};
use crate::Error;
use soroban_sdk::String;

/// Stock runs out, a refund frees a unit, and the last buyer gets it.
#[test]
fn test_buyers_limited_by_stock_until_refund() {
    let (env, client, admin, _, token_admin) = setup_test();
    seed_catalog(&env, &client, &admin);

    let buyer_a = funded_buyer(&env, &token_admin);
    let buyer_b = funded_buyer(&env, &token_admin);
    let buyer_c = funded_buyer(&env, &token_admin);

    let name = String::from_str(&env, "New Product");
    let id = client.add_product(&admin, &name, &2);
    assert_eq!(client.get_all_products().len(), 3);
    assert_eq!(client.get_product_by_id(&id).quantity, 2);

    client.buy_product(&buyer_a, &id, &PRICE);
    assert_eq!(client.get_product_by_id(&id).quantity, 1);
    client.buy_product(&buyer_b, &id, &PRICE);
    assert_eq!(client.get_product_by_id(&id).quantity, 0);

    let result = client.try_buy_product(&buyer_c, &id, &PRICE);
    assert_eq!(result, Err(Ok(Error::ZeroQuantity)));

    client.refund_product(&buyer_a, &id);
    assert_eq!(client.get_product_by_id(&id).quantity, 1);

    client.add_product(&admin, &name, &1);

    client.buy_product(&buyer_c, &id, &PRICE);
    assert_eq!(client.get_product_by_name(&name).quantity, 0);
    assert_eq!(client.get_custody_balance(), 2 * PRICE);
}

/// Restocking through `add_product` with a different quantity resets stock.
#[test]
fn test_admin_restock_reopens_sales() {
    let (env, client, admin, _, token_admin) = setup_test();
    seed_catalog(&env, &client, &admin);

    let name = String::from_str(&env, "New Product");
    let id = client.add_product(&admin, &name, &1);

    let buyer_a = funded_buyer(&env, &token_admin);
    let buyer_b = funded_buyer(&env, &token_admin);

    client.buy_product(&buyer_a, &id, &PRICE);
    assert_eq!(
        client.try_buy_product(&buyer_b, &id, &PRICE),
        Err(Ok(Error::ZeroQuantity))
    );

    assert_eq!(client.add_product(&admin, &name, &4), id);
    client.buy_product(&buyer_b, &id, &PRICE);

    assert_eq!(client.get_product_by_id(&id).quantity, 3);
    assert_eq!(client.get_all_products().len(), 3);
}
