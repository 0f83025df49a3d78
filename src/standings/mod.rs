pub mod resolver;

pub use resolver::{resolve, winners, Standing, StandingsGroup};
