pub mod history;
pub mod pool;
pub mod saved_games;
