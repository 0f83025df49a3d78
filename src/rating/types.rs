use serde::{Deserialize, Serialize};

pub type RatingValue = i32;

/// Outcome of a match from the winner's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Tie,
}

/// New rating for one roster entry, handed to the roster writer in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub name: String,
    pub rating: RatingValue,
}
