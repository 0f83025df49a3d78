pub mod points;
pub mod types;

pub use points::rating_delta;
pub use types::{Outcome, RatingUpdate, RatingValue};
