use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::{AUTHORITY_SEED, LP_MINT_SEED, POOL_SEED, VAULT_A_SEED, VAULT_B_SEED},
    curve,
    errors::AmmError,
    events::LiquidityRemoved,
    state::Pool,
};

pub fn remove_liquidity(
    ctx: Context<RemoveLiquidity>,
    share_amount: u64,
    amount_a_min: u64,
    amount_b_min: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    require!(ctx.accounts.pool.is_active(), AmmError::PoolPaused);

    let reserve_a = ctx.accounts.token_a_vault.amount;
    let reserve_b = ctx.accounts.token_b_vault.amount;
    let total_shares = ctx.accounts.pool.total_shares;

    let out = curve::withdraw_amounts(share_amount, total_shares, reserve_a, reserve_b)?;
    require!(out.amount_a >= amount_a_min, AmmError::SlippageExceeded);
    require!(out.amount_b >= amount_b_min, AmmError::SlippageExceeded);

    // Burn first; the token program rejects a withdrawer holding fewer
    // shares than requested.
    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.lp_mint.to_account_info(),
                from: ctx.accounts.withdrawer_lp_token.to_account_info(),
                authority: ctx.accounts.withdrawer.to_account_info(),
            },
        ),
        share_amount,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let authority_seeds = &[
        AUTHORITY_SEED.as_bytes(),
        pool_key.as_ref(),
        &[ctx.accounts.pool.authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_a_vault.to_account_info(),
                to: ctx.accounts.withdrawer_token_a.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        ),
        out.amount_a,
    )?;
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_b_vault.to_account_info(),
                to: ctx.accounts.withdrawer_token_b.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        ),
        out.amount_b,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.total_shares = pool
        .total_shares
        .checked_sub(share_amount)
        .ok_or(AmmError::ArithmeticOverflow)?;
    pool.last_updated_at = clock.unix_timestamp;

    emit!(LiquidityRemoved {
        pool: pool_key,
        withdrawer: ctx.accounts.withdrawer.key(),
        amount_a: out.amount_a,
        amount_b: out.amount_b,
        shares_burned: share_amount,
        total_shares: pool.total_shares,
        timestamp: clock.unix_timestamp,
    });
    msg!(
        "Liquidity removed: a={} b={} shares={}",
        out.amount_a,
        out.amount_b,
        share_amount
    );

    Ok(())
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
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
        has_one = lp_mint @ AmmError::InvalidMint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: Per-pool signing authority PDA; signs the vault transfers.
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
        seeds = [LP_MINT_SEED.as_bytes(), pool.key().as_ref()],
        bump = pool.lp_mint_bump,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = withdrawer_token_a.mint == pool.token_a_mint @ AmmError::InvalidMint,
        constraint = withdrawer_token_a.owner == withdrawer.key() @ AmmError::InvalidOwner,
    )]
    pub withdrawer_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = withdrawer_token_b.mint == pool.token_b_mint @ AmmError::InvalidMint,
        constraint = withdrawer_token_b.owner == withdrawer.key() @ AmmError::InvalidOwner,
    )]
    pub withdrawer_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = withdrawer_lp_token.mint == lp_mint.key() @ AmmError::InvalidMint,
        constraint = withdrawer_lp_token.owner == withdrawer.key() @ AmmError::InvalidOwner,
    )]
    pub withdrawer_lp_token: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub withdrawer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
