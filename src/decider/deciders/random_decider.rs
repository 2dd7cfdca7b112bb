use itertools::Itertools;
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{env_opt, Board, Color, Decider, GameError, Move, Pawn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomDeciderArgs {
    /// fixes the sequence of choices; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl RandomDeciderArgs {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_env() -> Result<Self, GameError> {
        let seed = env_opt("DECIDER_SEED")?;
        Ok(Self { seed })
    }
}

/// Plays a uniformly random legal move.
pub struct RandomDecider {
    color: Color,
    rng: StdRng,
}

impl RandomDecider {
    /// Every legal move for this decider's color. For each column, all step
    /// counts shorter than the gap to the opposing pawn are tried.
    pub fn list_possible_moves(&self, board: &Board) -> Result<Vec<Move>, GameError> {
        let mut possible_moves = Vec::new();

        for (column, fields) in board.fields().outer_iter().enumerate() {
            let mut own_row = None;
            let mut enemy_row = None;
            for (row, field) in fields.iter().enumerate() {
                match field.pawn().map(Pawn::color) {
                    Some(color) if color == self.color => own_row = Some(row),
                    Some(_) => enemy_row = Some(row),
                    None => {}
                }
            }

            let own_row = own_row.ok_or(GameError::PawnNotFound {
                color: self.color,
                column,
            })?;
            let enemy_row = enemy_row.ok_or(GameError::PawnNotFound {
                color: self.color.other(),
                column,
            })?;

            let distance = own_row.abs_diff(enemy_row) as i64;
            let legal_moves: Vec<Move> = (1..distance)
                .map(|amount| Move::new(board, self.color, column as i64, amount, false))
                .filter_ok(|m| board.is_move_legal(m))
                .collect::<Result<_, _>>()?;
            possible_moves.extend(legal_moves);
        }

        Ok(possible_moves)
    }
}

impl Decider for RandomDecider {
    type Args = RandomDeciderArgs;

    fn new(color: Color, args: Self::Args) -> Result<Self, GameError> {
        let rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { color, rng })
    }

    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &mut Board) -> Result<Move, GameError> {
        let possible_moves = self.list_possible_moves(board)?;
        let chosen = *possible_moves
            .choose(&mut self.rng)
            .ok_or(GameError::NoLegalMoves { color: self.color })?;

        debug!(
            "{} picked {} out of {} legal moves",
            self.color.name(),
            chosen,
            possible_moves.len()
        );
        board.move_pawn(chosen)?;
        Ok(chosen)
    }
}
