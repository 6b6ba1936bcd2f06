//! Gambit Rules models the rules of chess: the board, pseudo-legal move
//! generation for every piece, turn order, castling, and move notation with
//! a per-turn history.
//!
//! ```
//! use gambit_rules::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.moves().len(), 20);
//!
//! game.initialize_from_notation("e4 e5 Nf3").unwrap();
//! assert_eq!(game.history().to_string(), "1. e4 e5 2. Nf3");
//! ```

pub mod board;
pub mod boardrepr;
pub mod coretypes;
pub mod error;
pub mod game;
pub mod movegen;
pub mod movelist;
pub mod notation;
pub mod perft;
pub mod pieces;
pub mod player;
pub mod playout;

pub use board::Board;
pub use error::{Error, ErrorKind};
pub use game::Game;
pub use pieces::Piece;
pub use player::Player;
