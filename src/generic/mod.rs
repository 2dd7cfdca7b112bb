mod args;
mod board;
mod error;
mod field;
mod r#move;
mod pawn;

pub use args::{env_opt, env_or, BoardArgs};
pub use board::{Board, ColumnRef};
pub use error::{GameError, InvalidMove};
pub use field::Field;
pub use pawn::{Color, Pawn};
pub use r#move::Move;
