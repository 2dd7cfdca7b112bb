use std::str::FromStr;

use crate::GameError;

/// Reads `variable` from the environment, `None` when it is not set.
pub fn env_opt<T: FromStr>(variable: &str) -> Result<Option<T>, GameError> {
    match std::env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| GameError::InvalidConfig {
                variable: variable.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

/// Like [`env_opt`], falling back to `default` when the variable is not set.
pub fn env_or<T: FromStr>(variable: &str, default: T) -> Result<T, GameError> {
    Ok(env_opt(variable)?.unwrap_or(default))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardArgs {
    pub columns: usize,
    pub rows: usize,
    pub with_pawns: bool,
}

impl Default for BoardArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardArgs {
    const DEFAULT_COLUMNS: usize = 8;
    const DEFAULT_ROWS: usize = 8;
    const DEFAULT_WITH_PAWNS: bool = true;

    pub fn new() -> Self {
        Self {
            columns: BoardArgs::DEFAULT_COLUMNS,
            rows: BoardArgs::DEFAULT_ROWS,
            with_pawns: BoardArgs::DEFAULT_WITH_PAWNS,
        }
    }

    // loads BOARD_COLUMNS, BOARD_ROWS and BOARD_WITH_PAWNS or uses default values if not set
    pub fn from_env() -> Result<Self, GameError> {
        Ok(Self {
            columns: env_or("BOARD_COLUMNS", BoardArgs::DEFAULT_COLUMNS)?,
            rows: env_or("BOARD_ROWS", BoardArgs::DEFAULT_ROWS)?,
            with_pawns: env_or("BOARD_WITH_PAWNS", BoardArgs::DEFAULT_WITH_PAWNS)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // every test uses its own variable names, the environment is shared between test threads

    #[test]
    fn env_or_default() {
        assert_eq!(env_or("PAWN_RACE_TEST_UNSET", 12usize), Ok(12));
    }

    #[test]
    fn env_or_parses() {
        std::env::set_var("PAWN_RACE_TEST_ROWS", " 5 ");
        std::env::set_var("PAWN_RACE_TEST_FLAG", "false");
        assert_eq!(env_or("PAWN_RACE_TEST_ROWS", 8usize), Ok(5));
        assert_eq!(env_or("PAWN_RACE_TEST_FLAG", true), Ok(false));
    }

    #[test]
    fn env_or_invalid() {
        std::env::set_var("PAWN_RACE_TEST_COLUMNS", "many");
        assert_eq!(
            env_or("PAWN_RACE_TEST_COLUMNS", 8usize),
            Err(GameError::InvalidConfig {
                variable: "PAWN_RACE_TEST_COLUMNS".to_string(),
                value: "many".to_string(),
            })
        );
    }

    #[test]
    fn env_opt_values() {
        assert_eq!(env_opt::<u64>("PAWN_RACE_TEST_UNSET_SEED"), Ok(None));
        std::env::set_var("PAWN_RACE_TEST_SEED", "42");
        assert_eq!(env_opt::<u64>("PAWN_RACE_TEST_SEED"), Ok(Some(42)));
        std::env::set_var("PAWN_RACE_TEST_BAD_SEED", "-1");
        assert_eq!(
            env_opt::<u64>("PAWN_RACE_TEST_BAD_SEED"),
            Err(GameError::InvalidConfig {
                variable: "PAWN_RACE_TEST_BAD_SEED".to_string(),
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn default_args() {
        let args = BoardArgs::default();
        assert_eq!((args.columns, args.rows, args.with_pawns), (8, 8, true));
    }
}
