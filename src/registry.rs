use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::errors::PoolError;
use crate::storage::{self, PairRecord};

/// Sorts two token addresses into canonical `(lower, higher)` order.
pub fn sort_tokens(
    token_x: &Address,
    token_y: &Address,
) -> Result<(Address, Address), PoolError> {
    if token_x == token_y {
        return Err(PoolError::IdenticalTokens);
    }
    if token_x < token_y {
        Ok((token_x.clone(), token_y.clone()))
    } else {
        Ok((token_y.clone(), token_x.clone()))
    }
}

/// Order-independent identifier of a token pair: `sha256(xdr(lo) || xdr(hi))`.
pub fn pair_key(env: &Env, token_x: &Address, token_y: &Address) -> BytesN<32> {
    let (lo, hi) = if token_x <= token_y {
        (token_x, token_y)
    } else {
        (token_y, token_x)
    };
    let mut preimage = Bytes::new(env);
    preimage.append(&lo.clone().to_xdr(env));
    preimage.append(&hi.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Loads the pair for `(token_x, token_y)`, or a zeroed record if it has
/// never received liquidity. Nothing is written.
pub fn load_pair(
    env: &Env,
    token_x: &Address,
    token_y: &Address,
) -> Result<(BytesN<32>, PairRecord), PoolError> {
    let (token_a, token_b) = sort_tokens(token_x, token_y)?;
    let key = pair_key(env, &token_a, &token_b);
    let pair = storage::get_pair(env, &key).unwrap_or_else(|| PairRecord::empty(token_a, token_b));
    Ok((key, pair))
}

/// Reserves in caller order; `(0, 0)` for unknown pairs or identical tokens.
pub fn get_reserves(env: &Env, token_x: &Address, token_y: &Address) -> (i128, i128) {
    if token_x == token_y {
        return (0, 0);
    }
    let key = pair_key(env, token_x, token_y);
    match storage::get_pair(env, &key) {
        Some(pair) => pair.reserves_for(token_x),
        None => (0, 0),
    }
}

pub fn get_total_liquidity(env: &Env, token_x: &Address, token_y: &Address) -> i128 {
    if token_x == token_y {
        return 0;
    }
    let key = pair_key(env, token_x, token_y);
    storage::get_pair(env, &key)
        .map(|pair| pair.total_liquidity)
        .unwrap_or(0)
}

pub fn get_liquidity(env: &Env, token_x: &Address, token_y: &Address, provider: &Address) -> i128 {
    if token_x == token_y {
        return 0;
    }
    let key = pair_key(env, token_x, token_y);
    storage::get_liquidity(env, &key, provider)
}

/// Spot price of `token_x` in units of `token_y`, scaled by 1e18.
pub fn get_price(env: &Env, token_x: &Address, token_y: &Address) -> Result<i128, PoolError> {
    let (reserve_x, reserve_y) = get_reserves(env, token_x, token_y);
    if reserve_x <= 0 {
        return Err(PoolError::NoReserves);
    }
    let scaled = reserve_y
        .checked_mul(crate::math::PRICE_SCALE)
        .ok_or(PoolError::Overflow)?;
    Ok(scaled / reserve_x)
}
