use serde::{Deserialize, Serialize};

use crate::{GameError, Pawn};

/// One cell of the grid. Coordinates are assigned by the owning board and are
/// never checked here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    x: usize,
    y: usize,
    pawn: Option<Pawn>,
}

impl Field {
    pub fn new(x: usize, y: usize, pawn: Option<Pawn>) -> Self {
        Self { x, y, pawn }
    }

    /// Column of the field.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of the field.
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn pawn(&self) -> Option<&Pawn> {
        self.pawn.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.pawn.is_none()
    }

    pub fn add_pawn(&mut self, pawn: Pawn) -> Result<(), GameError> {
        if self.pawn.is_some() {
            return Err(GameError::FieldAlreadyOccupied {
                column: self.x,
                row: self.y,
            });
        }
        self.pawn = Some(pawn);
        Ok(())
    }

    pub fn clear_pawn(&mut self) {
        self.pawn = None;
    }

    pub(crate) fn take_pawn(&mut self) -> Option<Pawn> {
        self.pawn.take()
    }
}
