use soroban_sdk::{token::TokenClient, Address, Env};

use crate::errors::PoolError;
use crate::events;
use crate::math::{integer_sqrt, mul_div, quote};
use crate::registry;
use crate::storage;

/// Amounts actually deposited and liquidity minted for them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub amount_x: i128,
    pub amount_y: i128,
    pub liquidity: i128,
}

/// Computes a deposit against reserves `(reserve_x, reserve_y)` with
/// `total_liquidity` outstanding. Picks the binding side so neither token
/// exceeds the pool ratio.
pub fn compute_deposit(
    reserve_x: i128,
    reserve_y: i128,
    total_liquidity: i128,
    amount_x_desired: i128,
    amount_y_desired: i128,
    amount_x_min: i128,
    amount_y_min: i128,
) -> Result<Deposit, PoolError> {
    if amount_x_desired <= 0 || amount_y_desired <= 0 || amount_x_min < 0 || amount_y_min < 0 {
        return Err(PoolError::InsufficientAmount);
    }

    let deposit = if total_liquidity == 0 {
        let product = amount_x_desired
            .checked_mul(amount_y_desired)
            .ok_or(PoolError::Overflow)?;
        Deposit {
            amount_x: amount_x_desired,
            amount_y: amount_y_desired,
            liquidity: integer_sqrt(product),
        }
    } else {
        let amount_y_optimal = quote(amount_x_desired, reserve_x, reserve_y)?;
        let (amount_x, amount_y) = if amount_y_optimal <= amount_y_desired {
            (amount_x_desired, amount_y_optimal)
        } else {
            let amount_x_optimal = quote(amount_y_desired, reserve_y, reserve_x)?;
            (amount_x_optimal, amount_y_desired)
        };
        let liquidity_x = mul_div(amount_x, total_liquidity, reserve_x)?;
        let liquidity_y = mul_div(amount_y, total_liquidity, reserve_y)?;
        Deposit {
            amount_x,
            amount_y,
            liquidity: liquidity_x.min(liquidity_y),
        }
    };

    if deposit.amount_x < amount_x_min || deposit.amount_y < amount_y_min {
        return Err(PoolError::InsufficientAmount);
    }
    if deposit.liquidity <= 0 {
        return Err(PoolError::InsufficientLiquidityMinted);
    }
    Ok(deposit)
}

/// Token amounts released by burning `liquidity` units, rounded down.
pub fn compute_withdrawal(
    reserve_x: i128,
    reserve_y: i128,
    total_liquidity: i128,
    liquidity: i128,
) -> Result<(i128, i128), PoolError> {
    if liquidity <= 0 || liquidity > total_liquidity {
        return Err(PoolError::InsufficientLiquidity);
    }
    let amount_x = mul_div(liquidity, reserve_x, total_liquidity)?;
    let amount_y = mul_div(liquidity, reserve_y, total_liquidity)?;
    Ok((amount_x, amount_y))
}

#[allow(clippy::too_many_arguments)]
pub fn add_liquidity(
    env: &Env,
    sender: &Address,
    token_x: &Address,
    token_y: &Address,
    amount_x_desired: i128,
    amount_y_desired: i128,
    amount_x_min: i128,
    amount_y_min: i128,
    recipient: &Address,
) -> Result<Deposit, PoolError> {
    let (key, mut pair) = registry::load_pair(env, token_x, token_y)?;
    let (reserve_x, reserve_y) = pair.reserves_for(token_x);

    let deposit = compute_deposit(
        reserve_x,
        reserve_y,
        pair.total_liquidity,
        amount_x_desired,
        amount_y_desired,
        amount_x_min,
        amount_y_min,
    )?;

    let new_reserve_x = reserve_x
        .checked_add(deposit.amount_x)
        .ok_or(PoolError::Overflow)?;
    let new_reserve_y = reserve_y
        .checked_add(deposit.amount_y)
        .ok_or(PoolError::Overflow)?;
    let new_total = pair
        .total_liquidity
        .checked_add(deposit.liquidity)
        .ok_or(PoolError::Overflow)?;
    let new_balance = storage::get_liquidity(env, &key, recipient)
        .checked_add(deposit.liquidity)
        .ok_or(PoolError::Overflow)?;

    let contract = env.current_contract_address();
    TokenClient::new(env, token_x).transfer(sender, &contract, &deposit.amount_x);
    TokenClient::new(env, token_y).transfer(sender, &contract, &deposit.amount_y);

    pair.set_reserves_for(token_x, new_reserve_x, new_reserve_y);
    pair.total_liquidity = new_total;
    storage::set_pair(env, &key, &pair);
    storage::set_liquidity(env, &key, recipient, new_balance);

    events::LiquidityAction {
        token_x: token_x.clone(),
        token_y: token_y.clone(),
        amount_x: deposit.amount_x,
        amount_y: deposit.amount_y,
        liquidity: deposit.liquidity,
        is_add: true,
    }
    .publish(env);

    Ok(deposit)
}

#[allow(clippy::too_many_arguments)]
pub fn remove_liquidity(
    env: &Env,
    sender: &Address,
    token_x: &Address,
    token_y: &Address,
    liquidity: i128,
    amount_x_min: i128,
    amount_y_min: i128,
    recipient: &Address,
) -> Result<(i128, i128), PoolError> {
    let (key, mut pair) = registry::load_pair(env, token_x, token_y)?;

    let balance = storage::get_liquidity(env, &key, sender);
    if liquidity <= 0 || balance < liquidity {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (reserve_x, reserve_y) = pair.reserves_for(token_x);
    let (amount_x, amount_y) =
        compute_withdrawal(reserve_x, reserve_y, pair.total_liquidity, liquidity)?;
    if amount_x < amount_x_min || amount_y < amount_y_min {
        return Err(PoolError::InsufficientAmountReceived);
    }

    storage::set_liquidity(env, &key, sender, balance - liquidity);
    pair.total_liquidity -= liquidity;
    pair.set_reserves_for(token_x, reserve_x - amount_x, reserve_y - amount_y);
    storage::set_pair(env, &key, &pair);

    let contract = env.current_contract_address();
    if amount_x > 0 {
        TokenClient::new(env, token_x).transfer(&contract, recipient, &amount_x);
    }
    if amount_y > 0 {
        TokenClient::new(env, token_y).transfer(&contract, recipient, &amount_y);
    }

    events::LiquidityAction {
        token_x: token_x.clone(),
        token_y: token_y.clone(),
        amount_x,
        amount_y,
        liquidity,
        is_add: false,
    }
    .publish(env);

    Ok((amount_x, amount_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_deposit_uses_desired_amounts() {
        let deposit = compute_deposit(0, 0, 0, 100, 100, 0, 0).unwrap();
        assert_eq!(deposit, Deposit { amount_x: 100, amount_y: 100, liquidity: 100 });

        let deposit = compute_deposit(0, 0, 0, 2, 2_000, 0, 0).unwrap();
        assert_eq!(deposit.liquidity, 63);
    }

    #[test]
    fn second_deposit_is_rebalanced() {
        let deposit = compute_deposit(100, 100, 100, 50, 150, 0, 0).unwrap();
        assert_eq!(deposit, Deposit { amount_x: 50, amount_y: 50, liquidity: 50 });

        let deposit = compute_deposit(100, 200, 141, 80, 100, 0, 0).unwrap();
        assert_eq!((deposit.amount_x, deposit.amount_y), (50, 100));
        assert_eq!(deposit.liquidity, 70);
    }

    #[test]
    fn deposit_rejects_bad_amounts() {
        assert_eq!(compute_deposit(0, 0, 0, 0, 1, 0, 0), Err(PoolError::InsufficientAmount));
        assert_eq!(compute_deposit(0, 0, 0, 1, -1, 0, 0), Err(PoolError::InsufficientAmount));
        assert_eq!(compute_deposit(0, 0, 0, 10, 10, 11, 0), Err(PoolError::InsufficientAmount));
        assert_eq!(compute_deposit(0, 0, 0, i128::MAX, 2, 0, 0), Err(PoolError::Overflow));
    }

    #[test]
    fn withdrawal_rounds_down() {
        assert_eq!(compute_withdrawal(100, 100, 100, 100), Ok((100, 100)));
        assert_eq!(compute_withdrawal(10, 7, 3, 1), Ok((3, 2)));
        assert_eq!(compute_withdrawal(10, 7, 3, 4), Err(PoolError::InsufficientLiquidity));
    }

    proptest! {
        #[test]
        fn prop_deposit_never_exceeds_desired_or_dilutes(
            reserve_x in 1i128..1_000_000_000,
            reserve_y in 1i128..1_000_000_000,
            total in 1i128..1_000_000_000,
            desired_x in 1i128..1_000_000_000,
            desired_y in 1i128..1_000_000_000,
        ) {
            if let Ok(deposit) = compute_deposit(reserve_x, reserve_y, total, desired_x, desired_y, 0, 0) {
                prop_assert!(deposit.amount_x <= desired_x);
                prop_assert!(deposit.amount_y <= desired_y);
                // minted share never exceeds the deposited share of either reserve
                prop_assert!(deposit.liquidity * reserve_x <= deposit.amount_x * total);
                prop_assert!(deposit.liquidity * reserve_y <= deposit.amount_y * total);
            }
        }

        #[test]
        fn prop_withdrawal_never_overpays(
            reserve_x in 1i128..1_000_000_000,
            reserve_y in 1i128..1_000_000_000,
            total in 1i128..1_000_000_000,
            burn in 1i128..1_000_000_000,
        ) {
            let burn = burn.min(total);
            let (out_x, out_y) = compute_withdrawal(reserve_x, reserve_y, total, burn).unwrap();
            prop_assert!(out_x <= reserve_x && out_y <= reserve_y);
            prop_assert!(out_x * total <= burn * reserve_x);
            prop_assert!(out_y * total <= burn * reserve_y);
        }
    }
}
