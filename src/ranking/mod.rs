pub mod standings;

pub use standings::rank;
