//! Value transfer into and out of contract custody.
//!
//! Payments are made in the SEP-41 token configured at construction. The
//! contract tracks how much it holds for active purchases so a release can
//! never pay out more than was captured. Token calls go through the `try_`
//! client: a failing transfer becomes [`Error::TransferFailed`] and the host
//! rolls back everything the invocation wrote.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::Error;
use crate::storage::{get_config, get_custody, set_custody};

fn token_client(e: &Env) -> Result<token::Client<'_>, Error> {
    let config = get_config(e).ok_or(Error::TransferFailed)?;
    Ok(token::Client::new(e, &config.token))
}

/// Move `amount` from `from` into contract custody.
pub fn capture(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token_client(e)?;
    let custody = get_custody(e)
        .checked_add(amount)
        .ok_or(Error::TransferFailed)?;
    set_custody(e, custody);

    let result = client.try_transfer(from, &e.current_contract_address(), &amount);
    if !matches!(result, Ok(Ok(()))) {
        log!(e, "capture failed", from.clone(), amount);
        return Err(Error::TransferFailed);
    }
    Ok(())
}

/// Move `amount` out of contract custody to `to`.
pub fn release(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token_client(e)?;
    let custody = get_custody(e);
    if custody < amount {
        log!(e, "custody short", custody, amount);
        return Err(Error::TransferFailed);
    }
    set_custody(e, custody - amount);

    let result = client.try_transfer(&e.current_contract_address(), to, &amount);
    if !matches!(result, Ok(Ok(()))) {
        log!(e, "release failed", to.clone(), amount);
        return Err(Error::TransferFailed);
    }
    Ok(())
}
