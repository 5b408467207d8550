//! Pure constant-product curve computations.
//!
//! Handlers feed these functions live vault balances and the share supply;
//! nothing here touches accounts, so every pricing rule is unit-testable.
//! All divisions floor.

use crate::constants::FEE_DENOMINATOR;
use crate::errors::AmmError;
use crate::math::{integer_sqrt, mul_div};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositAmounts {
    pub amount_a: u64,
    pub amount_b: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawAmounts {
    pub amount_a: u64,
    pub amount_b: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_out: u64,
    /// Portion of the input retained by the pool for liquidity providers.
    pub fee_amount: u64,
}

/// Shares minted for the first deposit: `floor(sqrt(a * b))`.
pub fn initial_shares(amount_a: u64, amount_b: u64) -> Result<u64, AmmError> {
    let shares = integer_sqrt(amount_a as u128 * amount_b as u128);
    if shares == 0 {
        return Err(AmmError::InsufficientInitialLiquidity);
    }
    // sqrt of a product of two u64 values always fits in u64
    Ok(shares as u64)
}

/// Amounts actually taken for a subsequent deposit.
///
/// Greedy branch-and-clamp: take the full desired amount on one side and the
/// ratio-matching amount on the other, never exceeding either desired amount,
/// so the deposit sits on the current price ratio up to rounding down.
pub fn deposit_amounts(
    reserve_a: u64,
    reserve_b: u64,
    amount_a_desired: u64,
    amount_b_desired: u64,
) -> Result<DepositAmounts, AmmError> {
    let amount_b_optimal = mul_div(amount_a_desired as u128, reserve_b as u128, reserve_a as u128)?;
    if amount_b_optimal <= amount_b_desired as u128 {
        return Ok(DepositAmounts {
            amount_a: amount_a_desired,
            amount_b: amount_b_optimal as u64,
        });
    }
    let amount_a_optimal = mul_div(amount_b_desired as u128, reserve_a as u128, reserve_b as u128)?;
    // amount_b_optimal > amount_b_desired implies amount_a_optimal < amount_a_desired
    Ok(DepositAmounts {
        amount_a: amount_a_optimal as u64,
        amount_b: amount_b_desired,
    })
}

/// Shares minted for a subsequent deposit, derived from the A side only so
/// rounding cannot diverge between the two sides.
pub fn shares_for_deposit(
    amount_a: u64,
    total_shares: u64,
    reserve_a: u64,
) -> Result<u64, AmmError> {
    let shares = mul_div(amount_a as u128, total_shares as u128, reserve_a as u128)?;
    u64::try_from(shares).map_err(|_| AmmError::ArithmeticOverflow)
}

/// Strict proportional redemption, rounded down on both sides.
///
/// Redeeming the full supply pays out both reserves exactly; partial
/// redemptions may leave rounding dust behind for remaining holders.
pub fn withdraw_amounts(
    share_amount: u64,
    total_shares: u64,
    reserve_a: u64,
    reserve_b: u64,
) -> Result<WithdrawAmounts, AmmError> {
    if share_amount == 0 || total_shares == 0 || share_amount > total_shares {
        return Err(AmmError::InsufficientLiquidity);
    }
    let amount_a = mul_div(share_amount as u128, reserve_a as u128, total_shares as u128)?;
    let amount_b = mul_div(share_amount as u128, reserve_b as u128, total_shares as u128)?;
    // share_amount <= total_shares, so each payout is bounded by its reserve
    Ok(WithdrawAmounts {
        amount_a: amount_a as u64,
        amount_b: amount_b as u64,
    })
}

/// Constant-product output for an exact-in swap.
///
/// The fee is taken from the input and stays in the pool, which is what makes
/// the reserve product grow on every fee-bearing trade.
pub fn swap_quote(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<SwapQuote, AmmError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    // The input vault receives the full amount; its balance must stay a u64.
    if reserve_in as u128 + amount_in as u128 > u64::MAX as u128 {
        return Err(AmmError::InsufficientLiquidity);
    }
    let amount_in_after_fee = mul_div(
        amount_in as u128,
        (FEE_DENOMINATOR - fee_bps as u64) as u128,
        FEE_DENOMINATOR as u128,
    )? as u64;
    let new_reserve_in = reserve_in as u128 + amount_in_after_fee as u128;
    // floor(reserve_out * in_after_fee / (reserve_in + in_after_fee)) < reserve_out
    let amount_out = mul_div(reserve_out as u128, amount_in_after_fee as u128, new_reserve_in)? as u64;
    Ok(SwapQuote {
        amount_out,
        fee_amount: amount_in - amount_in_after_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_deposit_mints_sqrt() {
        // 100 units of two 6-decimal tokens mint 100 units of shares
        assert_eq!(initial_shares(100_000000, 100_000000).unwrap(), 100_000000);
        assert_eq!(initial_shares(4, 9).unwrap(), 6);
    }

    #[test]
    fn first_deposit_rejects_zero_shares() {
        assert!(matches!(
            initial_shares(0, 1_000_000),
            Err(AmmError::InsufficientInitialLiquidity)
        ));
        assert!(matches!(
            initial_shares(0, 0),
            Err(AmmError::InsufficientInitialLiquidity)
        ));
    }

    #[test]
    fn deposit_clamps_to_b_side() {
        // 2:1 pool; 30 A would need 15 B, caller offers 20 B
        let used = deposit_amounts(200, 100, 30, 20).unwrap();
        assert_eq!(used, DepositAmounts { amount_a: 30, amount_b: 15 });
    }

    #[test]
    fn deposit_clamps_to_a_side() {
        // 2:1 pool; 30 A would need 15 B but only 10 B is offered
        let used = deposit_amounts(200, 100, 30, 10).unwrap();
        assert_eq!(used, DepositAmounts { amount_a: 20, amount_b: 10 });
    }

    #[test]
    fn deposit_shares_are_proportional() {
        assert_eq!(shares_for_deposit(50, 100, 100).unwrap(), 50);
        assert_eq!(shares_for_deposit(1, 3, 2).unwrap(), 1);
    }

    #[test]
    fn withdraw_is_proportional() {
        let out = withdraw_amounts(75, 150, 150, 150).unwrap();
        assert_eq!(out, WithdrawAmounts { amount_a: 75, amount_b: 75 });
    }

    #[test]
    fn withdraw_full_supply_drains_pool() {
        let out = withdraw_amounts(150, 150, 151, 149).unwrap();
        assert_eq!(out, WithdrawAmounts { amount_a: 151, amount_b: 149 });
    }

    #[test]
    fn withdraw_rejects_bad_share_amounts() {
        assert!(matches!(
            withdraw_amounts(0, 100, 10, 10),
            Err(AmmError::InsufficientLiquidity)
        ));
        assert!(matches!(
            withdraw_amounts(10, 0, 10, 10),
            Err(AmmError::InsufficientLiquidity)
        ));
        assert!(matches!(
            withdraw_amounts(101, 100, 10, 10),
            Err(AmmError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn swap_fee_is_floored_off_the_input() {
        // 0.3% of 1000 is 3
        let quote = swap_quote(1000, 1_000_000, 1_000_000, 30).unwrap();
        assert_eq!(quote.fee_amount, 3);
        // out = floor(1_000_000 * 997 / 1_000_997)
        assert_eq!(quote.amount_out, 996);
    }

    #[test]
    fn swap_rejects_empty_reserves() {
        assert!(matches!(
            swap_quote(100, 0, 1_000, 30),
            Err(AmmError::InsufficientLiquidity)
        ));
        assert!(matches!(
            swap_quote(100, 1_000, 0, 30),
            Err(AmmError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn swap_rejects_reserve_overflow() {
        assert!(matches!(
            swap_quote(u64::MAX, u64::MAX, 1_000, 0),
            Err(AmmError::InsufficientLiquidity)
        ));
    }

    #[test]
    fn zero_input_swaps_to_zero() {
        let quote = swap_quote(0, 1_000, 1_000, 30).unwrap();
        assert_eq!(quote.amount_out, 0);
        assert_eq!(quote.fee_amount, 0);
    }

    // First deposit 100/100, second deposit 50/50, then remove half the
    // first depositor's shares.
    #[test]
    fn two_deposits_then_partial_withdrawal() {
        let first = initial_shares(100, 100).unwrap();
        assert_eq!(first, 100);

        let used = deposit_amounts(100, 100, 50, 50).unwrap();
        assert_eq!(used, DepositAmounts { amount_a: 50, amount_b: 50 });
        let second = shares_for_deposit(used.amount_a, first, 100).unwrap();
        assert_eq!(second, 50);

        let supply = first + second;
        assert_eq!(supply, 150);
        let out = withdraw_amounts(75, supply, 150, 150).unwrap();
        assert_eq!(out, WithdrawAmounts { amount_a: 75, amount_b: 75 });
    }

    proptest! {
        // x·y never decreases across a swap, counting the full input
        // (fee included) as entering the pool.
        #[test]
        fn swap_never_decreases_product(
            reserve_in in 1u64..1_000_000_000_000,
            reserve_out in 1u64..1_000_000_000_000,
            amount_in in 0u64..1_000_000_000_000,
            fee_bps in 0u16..10_000,
        ) {
            let quote = swap_quote(amount_in, reserve_in, reserve_out, fee_bps).unwrap();
            let before = reserve_in as u128 * reserve_out as u128;
            let after = (reserve_in as u128 + amount_in as u128)
                * (reserve_out as u128 - quote.amount_out as u128);
            prop_assert!(after >= before);
            prop_assert!(quote.amount_out < reserve_out);
        }

        // Depositing then redeeming the freshly minted shares never returns
        // more than was put in, on either side.
        #[test]
        fn deposit_withdraw_rounds_against_depositor(
            reserve_a in 1u64..1_000_000_000,
            reserve_b in 1u64..1_000_000_000,
            supply in 1u64..1_000_000_000,
            amount_a_desired in 0u64..1_000_000_000,
            amount_b_desired in 0u64..1_000_000_000,
        ) {
            let used = deposit_amounts(reserve_a, reserve_b, amount_a_desired, amount_b_desired).unwrap();
            let shares = shares_for_deposit(used.amount_a, supply, reserve_a).unwrap();
            if shares == 0 {
                return Ok(());
            }
            let out = withdraw_amounts(
                shares,
                supply + shares,
                reserve_a + used.amount_a,
                reserve_b + used.amount_b,
            ).unwrap();
            prop_assert!(out.amount_a <= used.amount_a);
            prop_assert!(out.amount_b <= used.amount_b);
        }

        // Clamped amounts never exceed the desired amounts and keep the
        // price ratio: used_a * reserve_b differs from used_b * reserve_a by
        // less than one reserve unit of rounding.
        #[test]
        fn deposit_never_exceeds_desired(
            reserve_a in 1u64..1_000_000_000,
            reserve_b in 1u64..1_000_000_000,
            amount_a_desired in 0u64..1_000_000_000,
            amount_b_desired in 0u64..1_000_000_000,
        ) {
            let used = deposit_amounts(reserve_a, reserve_b, amount_a_desired, amount_b_desired).unwrap();
            prop_assert!(used.amount_a <= amount_a_desired);
            prop_assert!(used.amount_b <= amount_b_desired);
        }

        // Partial redemptions round down, so paying out `s` then the
        // remaining `S - s` never exceeds the reserves.
        #[test]
        fn split_withdrawals_never_overpay(
            supply in 2u64..1_000_000_000,
            reserve_a in 1u64..1_000_000_000,
            reserve_b in 1u64..1_000_000_000,
            split in 1u64..1_000_000_000,
        ) {
            let share_amount = split % (supply - 1) + 1;
            let first = withdraw_amounts(share_amount, supply, reserve_a, reserve_b).unwrap();
            let rest = withdraw_amounts(
                supply - share_amount,
                supply - share_amount,
                reserve_a - first.amount_a,
                reserve_b - first.amount_b,
            ).unwrap();
            prop_assert!(first.amount_a + rest.amount_a <= reserve_a);
            prop_assert!(first.amount_b + rest.amount_b <= reserve_b);
        }
    }
}
