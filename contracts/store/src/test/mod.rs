pub mod scenario_test;

use crate::{Store, StoreClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token, Address, Env, Event, String, Val, Vec,
};

/// Price paid per unit in the tests
pub const PRICE: i128 = 1_000;

/// Starting token balance of every generated buyer
pub const BUYER_FUNDS: i128 = 10_000_000;

pub fn setup_test() -> (
    Env,
    StoreClient<'static>,
    Address,
    token::Client<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::Client::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    let contract_id = env.register(Store, (admin.clone(), token_address.clone()));
    let client = StoreClient::new(&env, &contract_id);

    (env, client, admin, token_client, token_admin_client)
}

/// Add the two initial products and return their IDs.
pub fn seed_catalog(env: &Env, client: &StoreClient, admin: &Address) -> (u64, u64) {
    let first = client.add_product(admin, &String::from_str(env, "Store 1"), &10);
    let second = client.add_product(admin, &String::from_str(env, "Store 2"), &15);
    (first, second)
}

/// Generate a buyer holding `BUYER_FUNDS` of the store token.
pub fn funded_buyer(env: &Env, token_admin: &token::StellarAssetClient) -> Address {
    let buyer = Address::generate(env);
    token_admin.mint(&buyer, &BUYER_FUNDS);
    buyer
}

pub fn advance_ledger(env: &Env, ledgers: u32) {
    let sequence = env.ledger().sequence();
    env.ledger().set_sequence_number(sequence + ledgers);
}

/// Contract events the store published during the last invocation.
pub fn store_events(env: &Env, client: &StoreClient) -> Vec<(Address, Vec<Val>, Val)> {
    let mut events = Vec::new(env);
    for event in env.events().all().iter() {
        if event.0 == client.address {
            events.push_back(event);
        }
    }
    events
}

/// The `(contract, topics, data)` entry `event` is recorded as when the store publishes it.
pub fn published(env: &Env, client: &StoreClient, event: &impl Event) -> (Address, Vec<Val>, Val) {
    (client.address.clone(), event.topics(env), event.data(env))
}
