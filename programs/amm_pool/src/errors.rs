use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Pool tokens must be two distinct mints.")]
    InvalidTokenPair,

    #[msg("Fee must be below 10000 basis points.")]
    InvalidFeeConfiguration,

    // Surfaced by the runtime as an account-in-use failure when `init`
    // collides with an existing pool address.
    #[msg("A pool already exists for this token pair and identifier.")]
    PoolAlreadyExists,

    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,

    #[msg("Division by zero.")]
    DivisionByZero,

    #[msg("Slippage tolerance exceeded.")]
    SlippageExceeded,

    #[msg("Initial deposit too small to mint any shares.")]
    InsufficientInitialLiquidity,

    #[msg("Insufficient liquidity for this operation.")]
    InsufficientLiquidity,

    #[msg("The pool is paused.")]
    PoolPaused,

    #[msg("Signer is not authorized for this operation.")]
    Unauthorized,

    #[msg("Constant-product invariant would decrease.")]
    InvariantViolated,

    #[msg("Invalid token mint for this pool.")]
    InvalidMint,

    #[msg("Invalid token account owner.")]
    InvalidOwner,

    #[msg("Invalid pool vault account.")]
    InvalidPoolTokenAccount,
}
