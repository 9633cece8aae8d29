pub mod daily_rewards;
pub mod not_found;
pub mod reward_history;
pub mod reward_history_details;
pub mod rewards;
pub mod settlement_details;
pub mod settlements;
pub mod transaction_details;
pub mod user_details;

pub use daily_rewards::*;
pub use not_found::*;
pub use reward_history::*;
pub use reward_history_details::*;
pub use rewards::*;
pub use settlement_details::*;
pub use settlements::*;
pub use transaction_details::*;
pub use user_details::*;
