pub mod processing;
pub mod templates;

pub use processing::{TrackerError, day_action_info, training_info};
