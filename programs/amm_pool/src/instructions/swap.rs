use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{AUTHORITY_SEED, POOL_SEED, VAULT_A_SEED, VAULT_B_SEED},
    curve,
    errors::AmmError,
    events::SwapExecuted,
    state::{Pool, SwapDirection},
};

pub fn swap(
    ctx: Context<Swap>,
    amount_in: u64,
    min_amount_out: u64,
    direction: SwapDirection,
) -> Result<()> {
    let clock = Clock::get()?;
    require!(ctx.accounts.pool.is_active(), AmmError::PoolPaused);

    let (reserve_in, reserve_out) = match direction {
        SwapDirection::AtoB => (
            ctx.accounts.token_a_vault.amount,
            ctx.accounts.token_b_vault.amount,
        ),
        SwapDirection::BtoA => (
            ctx.accounts.token_b_vault.amount,
            ctx.accounts.token_a_vault.amount,
        ),
    };

    let quote = curve::swap_quote(amount_in, reserve_in, reserve_out, ctx.accounts.pool.fee_bps)?;
    require!(quote.amount_out >= min_amount_out, AmmError::SlippageExceeded);

    let product_before = ctx.accounts.token_a_vault.amount as u128
        * ctx.accounts.token_b_vault.amount as u128;

    let pool_key = ctx.accounts.pool.key();
    let authority_seeds = &[
        AUTHORITY_SEED.as_bytes(),
        pool_key.as_ref(),
        &[ctx.accounts.pool.authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let (trader_source, input_vault, output_vault, trader_destination) = match direction {
        SwapDirection::AtoB => (
            &ctx.accounts.trader_token_a,
            &ctx.accounts.token_a_vault,
            &ctx.accounts.token_b_vault,
            &ctx.accounts.trader_token_b,
        ),
        SwapDirection::BtoA => (
            &ctx.accounts.trader_token_b,
            &ctx.accounts.token_b_vault,
            &ctx.accounts.token_a_vault,
            &ctx.accounts.trader_token_a,
        ),
    };

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: trader_source.to_account_info(),
                to: input_vault.to_account_info(),
                authority: ctx.accounts.trader.to_account_info(),
            },
        ),
        amount_in,
    )?;
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: output_vault.to_account_info(),
                to: trader_destination.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        ),
        quote.amount_out,
    )?;

    // Reload after the CPIs and confirm the product did not decrease; the
    // fee retained in the pool makes it grow on any fee-bearing trade.
    ctx.accounts.token_a_vault.reload()?;
    ctx.accounts.token_b_vault.reload()?;
    let product_after = ctx.accounts.token_a_vault.amount as u128
        * ctx.accounts.token_b_vault.amount as u128;
    require!(product_after >= product_before, AmmError::InvariantViolated);

    let pool = &mut ctx.accounts.pool;
    pool.last_updated_at = clock.unix_timestamp;

    emit!(SwapExecuted {
        pool: pool_key,
        trader: ctx.accounts.trader.key(),
        direction,
        amount_in,
        amount_out: quote.amount_out,
        fee_amount: quote.fee_amount,
        timestamp: clock.unix_timestamp,
    });
    msg!(
        "Swap: in={} out={} fee={}",
        amount_in,
        quote.amount_out,
        quote.fee_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            pool.token_a_mint.as_ref(),
            pool.token_b_mint.as_ref(),
            pool.pool_id.as_ref(),
        ],
        bump = pool.bump,
        has_one = token_a_vault @ AmmError::InvalidPoolTokenAccount,
        has_one = token_b_vault @ AmmError::InvalidPoolTokenAccount,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: Per-pool signing authority PDA; signs the output transfer.
    #[account(
        seeds = [AUTHORITY_SEED.as_bytes(), pool.key().as_ref()],
        bump = pool.authority_bump,
    )]
    pub pool_authority: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [VAULT_A_SEED.as_bytes(), pool.key().as_ref()],
        bump = pool.token_a_vault_bump,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [VAULT_B_SEED.as_bytes(), pool.key().as_ref()],
        bump = pool.token_b_vault_bump,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = trader_token_a.mint == pool.token_a_mint @ AmmError::InvalidMint,
        constraint = trader_token_a.owner == trader.key() @ AmmError::InvalidOwner,
    )]
    pub trader_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = trader_token_b.mint == pool.token_b_mint @ AmmError::InvalidMint,
        constraint = trader_token_b.owner == trader.key() @ AmmError::InvalidOwner,
    )]
    pub trader_token_b: Box<Account<'info, TokenAccount>>,

    pub trader: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
