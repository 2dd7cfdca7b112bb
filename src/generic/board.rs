use std::fmt::Display;

use itertools::Itertools;
use log::{debug, info};
use ndarray::Array2;
use uuid::Uuid;

use crate::{BoardArgs, Color, Field, GameError, InvalidMove, Move, Pawn};

/// A column given either by its index or by its letter (`a` = 0, `b` = 1, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Index(i64),
    Letter(String),
}

impl From<i32> for ColumnRef {
    fn from(index: i32) -> Self {
        ColumnRef::Index(index.into())
    }
}

impl From<i64> for ColumnRef {
    fn from(index: i64) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<char> for ColumnRef {
    fn from(letter: char) -> Self {
        ColumnRef::Letter(letter.to_string())
    }
}

impl From<&str> for ColumnRef {
    fn from(letter: &str) -> Self {
        ColumnRef::Letter(letter.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(letter: String) -> Self {
        ColumnRef::Letter(letter)
    }
}

/// The grid of fields plus the history of applied moves.
///
/// Fields are indexed `[(column, row)]`. White starts on row 0 and moves
/// towards higher rows, black starts on the last row and moves down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    fields: Array2<Field>,
    moves: Vec<Move>,
    game_id: Uuid,
}

impl Board {
    pub fn new(columns: usize, rows: usize, with_pawns: bool) -> Result<Self, GameError> {
        if columns == 0 || rows == 0 {
            return Err(GameError::InvalidDimensions { columns, rows });
        }

        let mut board = Self {
            fields: Array2::from_shape_fn((columns, rows), |(x, y)| Field::new(x, y, None)),
            moves: Vec::new(),
            game_id: Uuid::new_v4(),
        };
        debug!("created {} x {} board {}", columns, rows, board.game_id);

        if with_pawns {
            board.place_default_pawns(true)?;
        }
        Ok(board)
    }

    pub fn from_args(args: BoardArgs) -> Result<Self, GameError> {
        Self::new(args.columns, args.rows, args.with_pawns)
    }

    /// Number of columns.
    pub fn n(&self) -> usize {
        self.fields.dim().0
    }

    /// Number of rows.
    pub fn m(&self) -> usize {
        self.fields.dim().1
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn fields(&self) -> &Array2<Field> {
        &self.fields
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Resolves a column letter to its index, case-insensitive. Indices pass
    /// through unchanged and are not bounds-checked here.
    pub fn column_number(column: impl Into<ColumnRef>) -> Result<i64, GameError> {
        match column.into() {
            ColumnRef::Index(index) => Ok(index),
            ColumnRef::Letter(token) => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_ascii_alphabetic() => {
                        Ok(i64::from(letter.to_ascii_lowercase() as u8 - b'a'))
                    }
                    _ => Err(GameError::FieldDoesNotExist {
                        location: format!("in column '{}'", token),
                    }),
                }
            }
        }
    }

    fn index_of(&self, column: impl Into<ColumnRef>, row: i64) -> Result<(usize, usize), GameError> {
        let column = Self::column_number(column)?;
        let index = usize::try_from(column)
            .ok()
            .zip(usize::try_from(row).ok())
            .filter(|&(x, y)| x < self.n() && y < self.m());

        index.ok_or(GameError::FieldDoesNotExist {
            location: format!("[{}, {}]", column, row),
        })
    }

    pub fn get(&self, column: impl Into<ColumnRef>, row: i64) -> Result<&Field, GameError> {
        let index = self.index_of(column, row)?;
        Ok(&self.fields[index])
    }

    /// Mutable access for setting up positions. Moves during play go through
    /// [`Board::move_pawn`].
    pub fn get_mut(
        &mut self,
        column: impl Into<ColumnRef>,
        row: i64,
    ) -> Result<&mut Field, GameError> {
        let index = self.index_of(column, row)?;
        Ok(&mut self.fields[index])
    }

    /// Puts a white pawn on row 0 and a black pawn on the last row of every
    /// column. Without `clear_first`, an occupied start field is an error and
    /// no pawn is placed. Both start rows have to be distinct, so the board
    /// needs two rows.
    pub fn place_default_pawns(&mut self, clear_first: bool) -> Result<(), GameError> {
        if self.m() < 2 {
            return Err(GameError::InvalidDimensions {
                columns: self.n(),
                rows: self.m(),
            });
        }
        if clear_first {
            self.clear_all_pawns();
        }

        let last_row = self.m() - 1;
        let start_fields = (0..self.n())
            .map(|column| ((column, 0), Color::White))
            .chain((0..self.n()).map(|column| ((column, last_row), Color::Black)))
            .collect_vec();

        if let Some(occupied) = start_fields
            .iter()
            .map(|&(index, _)| &self.fields[index])
            .find(|field| !field.is_empty())
        {
            return Err(GameError::FieldAlreadyOccupied {
                column: occupied.x(),
                row: occupied.y(),
            });
        }

        for (index, color) in start_fields {
            self.fields[index].add_pawn(Pawn::new(color))?;
        }
        Ok(())
    }

    pub fn clear_all_pawns(&mut self) {
        self.fields.iter_mut().for_each(Field::clear_pawn);
    }

    /// Builds a move against this board without validating or applying it.
    pub fn get_move(
        &self,
        color: Color,
        column: impl Into<ColumnRef>,
        amount: i64,
    ) -> Result<Move, GameError> {
        let column = Self::column_number(column)?;
        Move::new(self, color, column, amount, false)
    }

    pub fn is_move_legal(&self, m: &Move) -> bool {
        match m.validate(self) {
            Ok(()) => true,
            Err(reason) => {
                debug!("{} is illegal: {}", m, reason);
                false
            }
        }
    }

    /// Validates `m` against the current position, moves the pawn and
    /// records the move. Nothing changes when validation fails.
    pub fn move_pawn(&mut self, m: Move) -> Result<(), GameError> {
        m.validate(self)?;

        let from = (m.column, m.from_field);
        let to_row = usize::try_from(m.to_field).map_err(|_| InvalidMove::OutOfBounds {
            column: m.column,
            from: m.from_field as i64,
            to: m.to_field,
        })?;
        let to = (m.column, to_row);

        let pawn = self.fields[from]
            .take_pawn()
            .ok_or(InvalidMove::MissingPawn {
                column: m.column,
                row: m.from_field,
            })?;
        if let Err(err) = self.fields[to].add_pawn(pawn) {
            self.fields[from].add_pawn(pawn)?;
            return Err(err);
        }

        info!("applied {}", m);
        self.moves.push(m);
        Ok(())
    }
}

fn column_letter(column: usize) -> char {
    u32::try_from(column)
        .ok()
        .and_then(|offset| offset.checked_add(u32::from(b'A')))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn glyph(field: &Field) -> char {
    match field.pawn().map(Pawn::color) {
        None => '.',
        Some(Color::White) => 'W',
        Some(Color::Black) => 'B',
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   {}", (0..self.n()).map(column_letter).join(""))?;
        for row in 0..self.m() {
            let cells = (0..self.n())
                .map(|column| glyph(&self.fields[(column, row)]))
                .join("");
            writeln!(f, "{:<2} {}", row, cells)?;
        }
        Ok(())
    }
}
