pub mod core;
pub mod engine;
pub mod protocol;

pub use crate::core::board::{Board, Color, GameError, Square};
pub use crate::engine::player::Player;
pub use crate::engine::search::{SearchLimits, Searcher};
pub use crate::protocol::Session;
