mod add_liquidity;
mod create_pool;
mod remove_liquidity;
mod set_pool_status;
mod swap;

pub use add_liquidity::*;
pub use create_pool::*;
pub use remove_liquidity::*;
pub use set_pool_status::*;
pub use swap::*;
