pub mod board;
pub mod logger;
pub mod piece;
pub mod types;

pub use board::*;
pub use logger::GameLogger;
pub use piece::*;
pub use types::*;
