// Core algorithm exports
pub mod distance;
pub mod eta;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use distance::{haversine_distance, round_km};
pub use eta::estimate_arrival;
pub use filters::{can_reach_customer, matching_skill_count, passes_inclusion_rule};
pub use matcher::{MatchError, VendorMatcher};
pub use scoring::calculate_match_score;
