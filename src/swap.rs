use soroban_sdk::{token::TokenClient, Address, Env, Vec};

use crate::errors::PoolError;
use crate::events;
use crate::math::{apply_slippage, get_amount_out, MAX_SLIPPAGE_BPS, SWAP_GAS_ESTIMATE};
use crate::registry;
use crate::storage;

/// Splits a direct swap path into `(token_in, token_out)`.
pub fn direct_path(path: &Vec<Address>) -> Result<(Address, Address), PoolError> {
    if path.len() != 2 {
        return Err(PoolError::InvalidPathLength);
    }
    let token_in = path.get_unchecked(0);
    let token_out = path.get_unchecked(1);
    if token_in == token_out {
        return Err(PoolError::IdenticalTokens);
    }
    Ok((token_in, token_out))
}

/// Prices `amount_in` along `path` against current reserves.
pub fn quote_path(
    env: &Env,
    amount_in: i128,
    path: &Vec<Address>,
    fee_bps: u32,
) -> Result<i128, PoolError> {
    let (token_in, token_out) = direct_path(path)?;
    let (reserve_in, reserve_out) = registry::get_reserves(env, &token_in, &token_out);
    get_amount_out(amount_in, reserve_in, reserve_out, fee_bps)
}

pub fn calculate_min_output_with_slippage(
    env: &Env,
    amount_in: i128,
    path: &Vec<Address>,
    slippage_bps: u32,
    fee_bps: u32,
) -> Result<i128, PoolError> {
    if slippage_bps > MAX_SLIPPAGE_BPS {
        return Err(PoolError::SlippageTooHigh);
    }
    let amount_out = quote_path(env, amount_in, path, fee_bps)?;
    apply_slippage(amount_out, slippage_bps)
}

/// Fixed-cost estimate; validates its inputs exactly like a real swap would.
pub fn estimate_swap_gas(
    env: &Env,
    amount_in: i128,
    path: &Vec<Address>,
    fee_bps: u32,
) -> Result<u64, PoolError> {
    let amount_out = quote_path(env, amount_in, path, fee_bps)?;
    if amount_out <= 0 {
        return Err(PoolError::InsufficientOutputAmount);
    }
    Ok(SWAP_GAS_ESTIMATE)
}

pub fn swap_exact_tokens_for_tokens(
    env: &Env,
    sender: &Address,
    amount_in: i128,
    amount_out_min: i128,
    path: &Vec<Address>,
    recipient: &Address,
    fee_bps: u32,
) -> Result<i128, PoolError> {
    let (token_in, token_out) = direct_path(path)?;
    if amount_in <= 0 {
        return Err(PoolError::AmountInZero);
    }

    let (key, mut pair) = registry::load_pair(env, &token_in, &token_out)?;
    let (reserve_in, reserve_out) = pair.reserves_for(&token_in);
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out, fee_bps)?;
    if amount_out <= 0 || amount_out < amount_out_min {
        return Err(PoolError::InsufficientOutputAmount);
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(PoolError::Overflow)?;
    let new_reserve_out = reserve_out - amount_out;

    let contract = env.current_contract_address();
    TokenClient::new(env, &token_in).transfer(sender, &contract, &amount_in);
    TokenClient::new(env, &token_out).transfer(&contract, recipient, &amount_out);

    pair.set_reserves_for(&token_in, new_reserve_in, new_reserve_out);
    storage::set_pair(env, &key, &pair);

    events::Swap {
        token_in,
        token_out,
        amount_in,
        amount_out,
    }
    .publish(env);

    Ok(amount_out)
}
