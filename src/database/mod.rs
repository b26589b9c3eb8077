pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod results;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
