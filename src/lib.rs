#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod admin;
mod errors;
mod events;
mod liquidity;
mod math;
mod registry;
mod storage;
mod swap;


use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub use crate::errors::PoolError;
pub use crate::storage::PoolConfig;

/// Constant-product pool over any number of token pairs.
#[contract]
pub struct Pool;

#[contractimpl]
impl Pool {
    pub fn initialize(env: Env, owner: Address, fee_bps: u32) -> Result<(), PoolError> {
        admin::initialize(&env, owner, fee_bps)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), PoolError> {
        admin::pause(&env, caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), PoolError> {
        admin::unpause(&env, caller)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PoolError> {
        admin::transfer_ownership(&env, caller, new_owner)
    }

    pub fn owner(env: Env) -> Result<Address, PoolError> {
        Ok(admin::config(&env)?.owner)
    }

    pub fn paused(env: Env) -> Result<bool, PoolError> {
        Ok(admin::config(&env)?.paused)
    }

    pub fn fee_bps(env: Env) -> Result<u32, PoolError> {
        Ok(admin::config(&env)?.fee_bps)
    }

    /// Deposits up to the desired amounts at the current pool ratio and
    /// credits the minted liquidity to `recipient`.
    ///
    /// Returns `(amount_x_used, amount_y_used, liquidity_minted)`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        env: Env,
        sender: Address,
        token_x: Address,
        token_y: Address,
        amount_x_desired: i128,
        amount_y_desired: i128,
        amount_x_min: i128,
        amount_y_min: i128,
        recipient: Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), PoolError> {
        admin::require_active(&env)?;
        admin::require_not_expired(&env, deadline)?;
        sender.require_auth();

        let deposit = liquidity::add_liquidity(
            &env,
            &sender,
            &token_x,
            &token_y,
            amount_x_desired,
            amount_y_desired,
            amount_x_min,
            amount_y_min,
            &recipient,
        )?;
        Ok((deposit.amount_x, deposit.amount_y, deposit.liquidity))
    }

    /// Burns `liquidity` units held by `sender` and pays the share of both
    /// reserves to `recipient`.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        env: Env,
        sender: Address,
        token_x: Address,
        token_y: Address,
        liquidity: i128,
        amount_x_min: i128,
        amount_y_min: i128,
        recipient: Address,
        deadline: u64,
    ) -> Result<(i128, i128), PoolError> {
        admin::require_active(&env)?;
        admin::require_not_expired(&env, deadline)?;
        sender.require_auth();

        liquidity::remove_liquidity(
            &env,
            &sender,
            &token_x,
            &token_y,
            liquidity,
            amount_x_min,
            amount_y_min,
            &recipient,
        )
    }

    /// Exact-input swap of `path[0]` for `path[1]`.
    pub fn swap_exact_tokens_for_tokens(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        recipient: Address,
        deadline: u64,
    ) -> Result<i128, PoolError> {
        let config = admin::require_active(&env)?;
        admin::require_not_expired(&env, deadline)?;
        sender.require_auth();

        swap::swap_exact_tokens_for_tokens(
            &env,
            &sender,
            amount_in,
            amount_out_min,
            &path,
            &recipient,
            config.fee_bps,
        )
    }

    /// Prices `amount_in` against the given reserves using the pool's
    /// configured fee. Fails with `NotInitialized` before `initialize`,
    /// since there is no fee to apply yet.
    pub fn get_amount_out(
        env: Env,
        amount_in: i128,
        reserve_in: i128,
        reserve_out: i128,
    ) -> Result<i128, PoolError> {
        let config = admin::config(&env)?;
        math::get_amount_out(amount_in, reserve_in, reserve_out, config.fee_bps)
    }

    /// Minimum acceptable output for `amount_in` along `path` after
    /// tolerating `slippage_bps` of price movement (at most 50%).
    pub fn min_output_with_slippage(
        env: Env,
        amount_in: i128,
        path: Vec<Address>,
        slippage_bps: u32,
    ) -> Result<i128, PoolError> {
        let config = admin::config(&env)?;
        swap::calculate_min_output_with_slippage(
            &env,
            amount_in,
            &path,
            slippage_bps,
            config.fee_bps,
        )
    }

    pub fn estimate_swap_gas(
        env: Env,
        amount_in: i128,
        path: Vec<Address>,
    ) -> Result<u64, PoolError> {
        let config = admin::config(&env)?;
        swap::estimate_swap_gas(&env, amount_in, &path, config.fee_bps)
    }

    pub fn pair_key(env: Env, token_x: Address, token_y: Address) -> BytesN<32> {
        registry::pair_key(&env, &token_x, &token_y)
    }

    pub fn get_reserves(env: Env, token_x: Address, token_y: Address) -> (i128, i128) {
        registry::get_reserves(&env, &token_x, &token_y)
    }

    pub fn get_total_liquidity(env: Env, token_x: Address, token_y: Address) -> i128 {
        registry::get_total_liquidity(&env, &token_x, &token_y)
    }

    pub fn get_liquidity(env: Env, token_x: Address, token_y: Address, provider: Address) -> i128 {
        registry::get_liquidity(&env, &token_x, &token_y, &provider)
    }

    pub fn get_price(env: Env, token_x: Address, token_y: Address) -> Result<i128, PoolError> {
        registry::get_price(&env, &token_x, &token_y)
    }
}
