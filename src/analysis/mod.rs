pub mod ability_scorer;
pub mod classifier;
pub mod fallback;
pub mod item_index;
pub mod item_selector;
pub mod records;
pub mod recommender;
pub mod skill_schedule;
