use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    errors::AmmError,
    events::PoolStatusChanged,
    state::Pool,
};

pub fn set_pool_status(ctx: Context<SetPoolStatus>, paused: bool) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;

    pool.status = if paused {
        Pool::STATUS_PAUSED
    } else {
        Pool::STATUS_ACTIVE
    };
    pool.last_updated_at = clock.unix_timestamp;

    emit!(PoolStatusChanged {
        pool: pool.key(),
        status: pool.status,
        timestamp: clock.unix_timestamp,
    });
    msg!("Pool status set: paused={}", paused);

    Ok(())
}

#[derive(Accounts)]
pub struct SetPoolStatus<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            pool.token_a_mint.as_ref(),
            pool.token_b_mint.as_ref(),
            pool.pool_id.as_ref(),
        ],
        bump = pool.bump,
        constraint = creator.key() == pool.creator @ AmmError::Unauthorized,
    )]
    pub pool: Account<'info, Pool>,

    pub creator: Signer<'info>,
}
