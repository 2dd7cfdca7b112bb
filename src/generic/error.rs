use thiserror::Error;

use crate::Color;

/// Reasons a move is rejected. These are the expected "illegal move" outcomes;
/// `Board::is_move_legal` folds them into a boolean.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("column {column} does not exist on a board with {columns} columns")]
    ColumnOutOfRange { column: i64, columns: usize },
    #[error("a pawn has to move forward by at least one field, got {amount}")]
    NonPositiveAmount { amount: i64 },
    #[error("moving from row {from} to row {to} in column {column} leaves the board")]
    OutOfBounds { column: usize, from: i64, to: i64 },
    #[error("field [{column}, {row}] holds {found:?} instead of a {expected} pawn")]
    SourceMismatch {
        column: usize,
        row: usize,
        expected: Color,
        found: Option<Color>,
    },
    #[error("field [{column}, {row}] on the path of the move is occupied")]
    PathBlocked { column: usize, row: usize },
    #[error("the move was built against another board")]
    ForeignBoard,
    #[error("there is no pawn on field [{column}, {row}]")]
    MissingPawn { column: usize, row: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("'{token}' is not a pawn color, expected X, O, WHITE or BLACK")]
    InvalidColor { token: String },
    #[error("cannot create a {columns} x {rows} board, both dimensions must be positive")]
    InvalidDimensions { columns: usize, rows: usize },
    #[error("field [{column}, {row}] already holds a pawn")]
    FieldAlreadyOccupied { column: usize, row: usize },
    #[error("field {location} does not exist")]
    FieldDoesNotExist { location: String },
    #[error("board is malformed: no {color} pawn in column {column}")]
    PawnNotFound { color: Color, column: usize },
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
    #[error("{color} has no legal moves left")]
    NoLegalMoves { color: Color },
    #[error("environment variable {variable} has an invalid value '{value}'")]
    InvalidConfig { variable: String, value: String },
}
