pub mod evaluator;
pub mod leaderboard;
pub mod progression;
pub mod rewards;
