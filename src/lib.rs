pub mod engine;
pub mod errors;
pub mod models;

pub use engine::challenges::{challenge_score, evaluate, pick_daily, SCENARIOS};
pub use engine::classifier::classify;
pub use engine::insights::{cash_flow, category_breakdown, garden_tips, tree_health};
pub use engine::market::{generate_history, jitter_price, refresh_prices, DEFAULT_HISTORY_DAYS};
pub use engine::portfolio::{buy, sell, summarize};
pub use errors::AppError;
pub use models::instrument::InstrumentCatalog;
