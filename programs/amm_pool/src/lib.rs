#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod math;
pub mod state;

mod instructions;

pub use instructions::*;


declare_id!("GL6uWvwZAapbf54GQb7PwKxXrC6gnjyNcrBMeAvkh7mg");

#[program]
pub mod amm_pool {
    use super::*;

    /// Allocate the pool record, both vaults, and the share mint for one
    /// `(token_a, token_b, pool_id)` pair. No token movement.
    pub fn create_pool(ctx: Context<CreatePool>, fee_bps: u16, pool_id: [u8; 32]) -> Result<()> {
        instructions::create_pool(ctx, fee_bps, pool_id)
    }

    /// Deposit up to the desired amounts at the current reserve ratio and
    /// mint proportional shares to the depositor.
    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_a_desired: u64,
        amount_b_desired: u64,
        amount_a_min: u64,
        amount_b_min: u64,
    ) -> Result<()> {
        instructions::add_liquidity(
            ctx,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        )
    }

    /// Burn shares and pay out the proportional slice of both reserves.
    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        share_amount: u64,
        amount_a_min: u64,
        amount_b_min: u64,
    ) -> Result<()> {
        instructions::remove_liquidity(ctx, share_amount, amount_a_min, amount_b_min)
    }

    /// Exact-in constant-product swap; the fee stays in the pool.
    pub fn swap(
        ctx: Context<Swap>,
        amount_in: u64,
        min_amount_out: u64,
        direction: state::SwapDirection,
    ) -> Result<()> {
        instructions::swap(ctx, amount_in, min_amount_out, direction)
    }

    /// Pause or resume a pool. Creator only.
    pub fn set_pool_status(ctx: Context<SetPoolStatus>, paused: bool) -> Result<()> {
        instructions::set_pool_status(ctx, paused)
    }
}
