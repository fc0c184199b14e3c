pub mod plot;
pub mod proposal;
pub mod proposal_utils;
pub mod sizing;
