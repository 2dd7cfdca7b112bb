use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Board, Color, GameError, InvalidMove, Pawn};

/// A pawn transition within one column.
///
/// `from_field` and `to_field` are fixed when the move is built. They are not
/// re-derived when the board changes, so a move has to be validated against
/// the current board before it is trusted. The move only remembers which
/// board it was built against, it never holds on to the board itself.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub board_id: Uuid,
    pub color: Color,
    pub column: usize,
    pub amount: i64,
    pub from_field: usize,
    pub to_field: i64,
}

impl Move {
    pub fn new(
        board: &Board,
        color: Color,
        column: i64,
        amount: i64,
        auto_validate: bool,
    ) -> Result<Self, GameError> {
        let columns = board.n();
        let column = usize::try_from(column)
            .ok()
            .filter(|&column| column < columns)
            .ok_or(InvalidMove::ColumnOutOfRange { column, columns })?;

        let from_field = Self::find_from_field(board, color, column)?;
        // saturates on huge amounts; such targets are off the board either way
        let to_field =
            (from_field as i64).saturating_add(amount.saturating_mul(color.direction()));

        let new_move = Self {
            board_id: board.game_id(),
            color,
            column,
            amount,
            from_field,
            to_field,
        };

        if auto_validate {
            new_move.validate(board)?;
        }
        Ok(new_move)
    }

    /// Finds the row of the mover's own pawn. White scans upward from row 0,
    /// black scans downward from the last row to row 1.
    fn find_from_field(board: &Board, color: Color, column: usize) -> Result<usize, GameError> {
        let rows: Vec<usize> = match color {
            Color::White => (0..board.m()).collect(),
            Color::Black => (1..board.m()).rev().collect(),
        };

        rows.into_iter()
            .find(|&row| board.fields()[(column, row)].pawn().map(Pawn::color) == Some(color))
            .ok_or(GameError::PawnNotFound { color, column })
    }

    /// Rows the pawn passes through, excluding the source and including the
    /// destination. Empty when `amount` is not positive.
    pub fn path(&self) -> impl Iterator<Item = i64> {
        let (from, direction) = (self.from_field as i64, self.color.direction());
        (1..=self.amount).map_while(move |step| {
            step.checked_mul(direction)
                .and_then(|delta| from.checked_add(delta))
        })
    }

    /// Checks the move against the current state of `board`. Never mutates
    /// anything, so it can be called any number of times.
    pub fn validate(&self, board: &Board) -> Result<(), InvalidMove> {
        if self.board_id != board.game_id() {
            return Err(InvalidMove::ForeignBoard);
        }
        if self.amount <= 0 {
            return Err(InvalidMove::NonPositiveAmount {
                amount: self.amount,
            });
        }

        let out_of_bounds = InvalidMove::OutOfBounds {
            column: self.column,
            from: self.from_field as i64,
            to: self.to_field,
        };
        let column = self.column as i64;
        let source = board
            .get(column, self.from_field as i64)
            .map_err(|_| out_of_bounds)?;
        board
            .get(column, self.to_field)
            .map_err(|_| out_of_bounds)?;

        let found = source.pawn().map(Pawn::color);
        if found != Some(self.color) {
            return Err(InvalidMove::SourceMismatch {
                column: self.column,
                row: self.from_field,
                expected: self.color,
                found,
            });
        }

        for row in self.path() {
            let field = board.get(column, row).map_err(|_| out_of_bounds)?;
            if !field.is_empty() {
                return Err(InvalidMove::PathBlocked {
                    column: self.column,
                    row: field.y(),
                });
            }
        }
        Ok(())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} move: column [{}] fields [{} -> {}]",
            self.color.name(),
            self.column,
            self.from_field,
            self.to_field
        )
    }
}
