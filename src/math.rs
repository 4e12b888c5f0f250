//! Integer arithmetic for pricing and liquidity.
//! Every product is checked and every quotient floors, so rounding always
//! favors the pool.

use crate::errors::PoolError;

/// Basis point denominator.
pub const BPS_DENOMINATOR: i128 = 10_000;
/// Scale applied to spot prices returned by `get_price` (1e18).
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;
/// Upper bound accepted by the slippage helper (50%).
pub const MAX_SLIPPAGE_BPS: u32 = 5_000;
/// Upper bound accepted for the trading fee at initialization (10%).
pub const MAX_FEE_BPS: u32 = 1_000;
/// Flat cost reported by `estimate_swap_gas`.
pub const SWAP_GAS_ESTIMATE: u64 = 150_000;

/// `a * b / denominator` with a checked product and floor division.
///
/// Callers only divide by reserves, total liquidity or `BPS_DENOMINATOR`, all
/// of which are positive on every reachable path; a zero denominator still
/// fails with `DivisionByZero` instead of trapping.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, PoolError> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(PoolError::Overflow)?;
    Ok(product / denominator)
}

/// Floor square root using Babylonian iteration.
///
/// `0, 1, 2, 3` map to `0, 1, 1, 1`; non-positive input yields 0.
pub fn integer_sqrt(y: i128) -> i128 {
    if y <= 0 {
        return 0;
    }
    if y <= 3 {
        return 1;
    }
    let mut z = y;
    let mut x = y / 2 + 1;
    while x < z {
        z = x;
        x = (y / x + x) / 2;
    }
    z
}

/// Output of an exact-input swap against `reserve_in`/`reserve_out`.
///
/// The fee is taken from `amount_in` before the constant-product division:
/// `out = in*(10000-fee)*reserve_out / (reserve_in*10000 + in*(10000-fee))`.
/// A zero fee reduces this to `in*reserve_out / (reserve_in + in)`.
pub fn get_amount_out(
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
    fee_bps: u32,
) -> Result<i128, PoolError> {
    if amount_in <= 0 {
        return Err(PoolError::AmountInZero);
    }
    if reserve_in <= 0 {
        return Err(PoolError::ReserveInZero);
    }
    if reserve_out <= 0 {
        return Err(PoolError::ReserveOutZero);
    }
    let amount_in_with_fee = amount_in
        .checked_mul(BPS_DENOMINATOR - fee_bps as i128)
        .ok_or(PoolError::Overflow)?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(PoolError::Overflow)?;
    let denominator = reserve_in
        .checked_mul(BPS_DENOMINATOR)
        .and_then(|r| r.checked_add(amount_in_with_fee))
        .ok_or(PoolError::Overflow)?;
    Ok(numerator / denominator)
}

/// Amount of the other token matching `amount_x` at the current ratio.
pub fn quote(amount_x: i128, reserve_x: i128, reserve_y: i128) -> Result<i128, PoolError> {
    if reserve_x <= 0 || reserve_y <= 0 {
        return Err(PoolError::NoReserves);
    }
    mul_div(amount_x, reserve_y, reserve_x)
}

/// Applies a slippage tolerance in basis points to an expected output.
pub fn apply_slippage(amount_out: i128, slippage_bps: u32) -> Result<i128, PoolError> {
    if slippage_bps > MAX_SLIPPAGE_BPS {
        return Err(PoolError::SlippageTooHigh);
    }
    mul_div(
        amount_out,
        BPS_DENOMINATOR - slippage_bps as i128,
        BPS_DENOMINATOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sqrt_small_values() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(2), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(-9), 0);
    }

    #[test]
    fn sqrt_perfect_squares() {
        assert_eq!(integer_sqrt(2304), 48);
        assert_eq!(integer_sqrt(10_000), 100);
        assert_eq!(integer_sqrt(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn sqrt_floors_between_squares() {
        assert_eq!(integer_sqrt(2303), 47);
        assert_eq!(integer_sqrt(2305), 48);
        assert_eq!(integer_sqrt(99), 9);
    }

    #[test]
    fn sqrt_largest_input() {
        let root = integer_sqrt(i128::MAX);
        assert!(root * root <= i128::MAX);
        assert!((root + 1).checked_mul(root + 1).is_none());
    }

    #[test]
    fn amount_out_without_fee() {
        assert_eq!(get_amount_out(10, 1000, 1000, 0), Ok(9));
        assert_eq!(get_amount_out(1000, 1000, 1000, 0), Ok(500));
    }

    #[test]
    fn amount_out_with_fee() {
        // 30 bps is the 997/1000 rule
        assert_eq!(get_amount_out(1_000, 1_000_000, 1_000_000, 30), Ok(996));
        assert_eq!(get_amount_out(1_000, 1_000_000, 1_000_000, 0), Ok(999));
    }

    #[test]
    fn amount_out_rejects_zero_inputs() {
        assert_eq!(get_amount_out(0, 1, 1, 0), Err(PoolError::AmountInZero));
        assert_eq!(get_amount_out(1, 0, 1, 0), Err(PoolError::ReserveInZero));
        assert_eq!(get_amount_out(1, 1, 0, 0), Err(PoolError::ReserveOutZero));
    }

    #[test]
    fn amount_out_overflow_is_reported() {
        assert_eq!(
            get_amount_out(i128::MAX / 2, i128::MAX / 2, i128::MAX / 2, 0),
            Err(PoolError::Overflow)
        );
    }

    #[test]
    fn slippage_cap() {
        assert_eq!(apply_slippage(1_000, 5_000), Ok(500));
        assert_eq!(apply_slippage(1_000, 5_001), Err(PoolError::SlippageTooHigh));
        assert_eq!(apply_slippage(1_000, 0), Ok(1_000));
        assert_eq!(apply_slippage(999, 100), Ok(989));
    }

    #[test]
    fn mul_div_floors_and_rejects_zero_denominator() {
        assert_eq!(mul_div(10, 7, 3), Ok(23));
        assert_eq!(mul_div(1, 1, 0), Err(PoolError::DivisionByZero));
        assert_eq!(mul_div(i128::MAX, 2, 1), Err(PoolError::Overflow));
    }

    #[test]
    fn quote_requires_reserves() {
        assert_eq!(quote(50, 100, 100), Ok(50));
        assert_eq!(quote(50, 0, 100), Err(PoolError::NoReserves));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_sqrt_is_floor(y in 0i128..=(u64::MAX as i128)) {
            let x = integer_sqrt(y);
            prop_assert!(x * x <= y);
            prop_assert!((x + 1) * (x + 1) > y);
        }

        #[test]
        fn prop_swap_never_decreases_k(
            reserve_in in 1i128..1_000_000_000_000,
            reserve_out in 1i128..1_000_000_000_000,
            amount_in in 1i128..1_000_000_000_000,
            fee_bps in 0u32..=MAX_FEE_BPS,
        ) {
            let out = get_amount_out(amount_in, reserve_in, reserve_out, fee_bps).unwrap();
            prop_assert!(out < reserve_out);
            let k_before = reserve_in * reserve_out;
            let k_after = (reserve_in + amount_in) * (reserve_out - out);
            prop_assert!(k_after >= k_before);
        }

        #[test]
        fn prop_fee_never_increases_output(
            reserve_in in 1i128..1_000_000_000_000,
            reserve_out in 1i128..1_000_000_000_000,
            amount_in in 1i128..1_000_000_000_000,
            fee_bps in 1u32..=MAX_FEE_BPS,
        ) {
            let free = get_amount_out(amount_in, reserve_in, reserve_out, 0).unwrap();
            let charged = get_amount_out(amount_in, reserve_in, reserve_out, fee_bps).unwrap();
            prop_assert!(charged <= free);
        }
    }
}
