mod piece;
pub use piece::*;
mod board;
pub use board::*;
mod terminal;
pub use terminal::*;
mod game;
pub use game::*;
