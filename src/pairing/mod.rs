pub mod engine;
pub mod history;

pub use engine::generate_pairings;
pub use history::HistoryLedger;
