use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::{
    constants::{AUTHORITY_SEED, LP_MINT_SEED, POOL_SEED, VAULT_A_SEED, VAULT_B_SEED},
    curve,
    errors::AmmError,
    events::LiquidityAdded,
    state::Pool,
};

pub fn add_liquidity(
    ctx: Context<AddLiquidity>,
    amount_a_desired: u64,
    amount_b_desired: u64,
    amount_a_min: u64,
    amount_b_min: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    require!(ctx.accounts.pool.is_active(), AmmError::PoolPaused);

    // Reserves come from the live vault balances, never from cached state.
    let reserve_a = ctx.accounts.token_a_vault.amount;
    let reserve_b = ctx.accounts.token_b_vault.amount;
    let total_shares = ctx.accounts.pool.total_shares;

    let (amount_a, amount_b, shares) = if total_shares == 0 {
        // First deposit sets the price; both desired amounts are taken in full.
        let shares = curve::initial_shares(amount_a_desired, amount_b_desired)?;
        (amount_a_desired, amount_b_desired, shares)
    } else {
        let used = curve::deposit_amounts(reserve_a, reserve_b, amount_a_desired, amount_b_desired)?;
        let shares = curve::shares_for_deposit(used.amount_a, total_shares, reserve_a)?;
        require!(shares > 0, AmmError::InsufficientLiquidity);
        (used.amount_a, used.amount_b, shares)
    };

    require!(amount_a >= amount_a_min, AmmError::SlippageExceeded);
    require!(amount_b >= amount_b_min, AmmError::SlippageExceeded);

    // Move both deposits into the vaults, then mint shares against them.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_a.to_account_info(),
                to: ctx.accounts.token_a_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount_a,
    )?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_b.to_account_info(),
                to: ctx.accounts.token_b_vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount_b,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let authority_seeds = &[
        AUTHORITY_SEED.as_bytes(),
        pool_key.as_ref(),
        &[ctx.accounts.pool.authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.lp_mint.to_account_info(),
                to: ctx.accounts.depositor_lp_token.to_account_info(),
                authority: ctx.accounts.pool_authority.to_account_info(),
            },
            signer_seeds,
        ),
        shares,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.total_shares = pool
        .total_shares
        .checked_add(shares)
        .ok_or(AmmError::ArithmeticOverflow)?;
    pool.last_updated_at = clock.unix_timestamp;

    emit!(LiquidityAdded {
        pool: pool_key,
        depositor: ctx.accounts.depositor.key(),
        amount_a,
        amount_b,
        shares_minted: shares,
        total_shares: pool.total_shares,
        timestamp: clock.unix_timestamp,
    });
    msg!("Liquidity added: a={} b={} shares={}", amount_a, amount_b, shares);

    Ok(())
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
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

    /// CHECK: Per-pool signing authority PDA; only signs the mint CPI.
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
        constraint = depositor_token_a.mint == pool.token_a_mint @ AmmError::InvalidMint,
        constraint = depositor_token_a.owner == depositor.key() @ AmmError::InvalidOwner,
    )]
    pub depositor_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = depositor_token_b.mint == pool.token_b_mint @ AmmError::InvalidMint,
        constraint = depositor_token_b.owner == depositor.key() @ AmmError::InvalidOwner,
    )]
    pub depositor_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp_token: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
