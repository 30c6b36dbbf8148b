use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

/// Guard for privileged operations.
///
/// The caller must have signed the invocation and must be the administrator
/// recorded at construction.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let config = storage::get_config(e).ok_or(Error::AccessDenied)?;
    if *caller != config.admin {
        return Err(Error::AccessDenied);
    }
    Ok(())
}
