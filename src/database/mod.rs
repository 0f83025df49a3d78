pub mod connection;
pub mod models;
pub mod prize_points;
pub mod roster;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
