// AI module for the computer paddle

mod bot;
mod tracker;

pub use bot::Bot;
pub use tracker::DeadZoneTracker;

use crate::game::Rules;

/// Create the computer opponent for a rule set
pub fn create_bot(rules: &Rules) -> Box<dyn Bot> {
    Box::new(DeadZoneTracker::new(rules.dead_zone))
}
