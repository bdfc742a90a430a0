//! Do Not Find The Fox game model

pub mod board;
pub mod patterns;
pub mod supply;

pub use board::{BOARD_CELLS, BOARD_WIDTH, Board, Tile};
pub use patterns::{FOX_PATTERNS, FoxScanner};
pub use supply::TileSupply;
