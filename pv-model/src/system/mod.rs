pub mod finance;
pub mod sizing;
