pub mod community;
pub mod delivery;
pub mod driver;
pub mod learning;
pub mod rewards;
pub mod scorecard;
pub mod trip;
pub mod wellness;
