mod deciders;
mod factory;

pub use deciders::*;
pub use factory::DeciderFactory;

use crate::{Board, Color, GameError, Move};

/// Decider is the interface of a player. It may inspect the board as much as
/// it likes, but the only change it makes is applying its chosen move through
/// `Board::move_pawn`.
///
/// Nothing enforces turn order; the caller decides whose turn it is.
pub trait Decider {
    type Args: Clone;

    fn new(color: Color, args: Self::Args) -> Result<Self, GameError>
    where
        Self: Sized;

    /// the color this decider plays
    fn color(&self) -> Color;

    /// picks a legal move, applies it to `board` and returns it.
    fn make_move(&mut self, board: &mut Board) -> Result<Move, GameError>;
}
