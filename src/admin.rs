use soroban_sdk::{log, Address, Env, String};

use crate::errors::PoolError;
use crate::events;
use crate::math::MAX_FEE_BPS;
use crate::storage::{self, PoolConfig};

/// Strkey of the all-zero account, used as the "unset" address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let zero_address = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    address == &zero_address
}

pub fn initialize(env: &Env, owner: Address, fee_bps: u32) -> Result<(), PoolError> {
    if storage::has_config(env) {
        return Err(PoolError::AlreadyInitialized);
    }
    if is_zero_address(env, &owner) {
        return Err(PoolError::ZeroAddress);
    }
    if fee_bps > MAX_FEE_BPS {
        return Err(PoolError::InvalidFee);
    }
    storage::set_config(
        env,
        &PoolConfig {
            owner,
            paused: false,
            fee_bps,
        },
    );
    log!(env, "pool initialized", fee_bps);
    Ok(())
}

pub fn config(env: &Env) -> Result<PoolConfig, PoolError> {
    storage::get_config(env).ok_or(PoolError::NotInitialized)
}

/// Config of a pool that accepts state-mutating calls.
pub fn require_active(env: &Env) -> Result<PoolConfig, PoolError> {
    let config = config(env)?;
    if config.paused {
        log!(env, "rejected: pool is paused");
        return Err(PoolError::Paused);
    }
    storage::bump_instance(env);
    Ok(config)
}

pub fn require_not_expired(env: &Env, deadline: u64) -> Result<(), PoolError> {
    let now = env.ledger().timestamp();
    if now > deadline {
        log!(env, "rejected: deadline passed", deadline, now);
        return Err(PoolError::Expired);
    }
    Ok(())
}

fn require_owner(env: &Env, caller: &Address) -> Result<PoolConfig, PoolError> {
    let config = config(env)?;
    if *caller != config.owner {
        log!(env, "rejected: caller is not the owner");
        return Err(PoolError::NotOwner);
    }
    caller.require_auth();
    Ok(config)
}

pub fn pause(env: &Env, caller: Address) -> Result<(), PoolError> {
    let mut config = require_owner(env, &caller)?;
    if config.paused {
        return Err(PoolError::AlreadyPaused);
    }
    config.paused = true;
    storage::set_config(env, &config);
    events::Paused { owner: caller }.publish(env);
    Ok(())
}

pub fn unpause(env: &Env, caller: Address) -> Result<(), PoolError> {
    let mut config = require_owner(env, &caller)?;
    if !config.paused {
        return Err(PoolError::NotPaused);
    }
    config.paused = false;
    storage::set_config(env, &config);
    events::Unpaused { owner: caller }.publish(env);
    Ok(())
}

pub fn transfer_ownership(env: &Env, caller: Address, new_owner: Address) -> Result<(), PoolError> {
    let mut config = require_owner(env, &caller)?;
    if is_zero_address(env, &new_owner) {
        return Err(PoolError::ZeroAddress);
    }
    if new_owner == config.owner {
        return Err(PoolError::SameOwner);
    }
    let previous_owner = config.owner;
    config.owner = new_owner.clone();
    storage::set_config(env, &config);
    log!(env, "ownership transferred", previous_owner, new_owner);
    events::OwnershipTransferred {
        previous_owner,
        new_owner,
    }
    .publish(env);
    Ok(())
}
