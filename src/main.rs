use log::{error, info, warn};
use pawn_race::{
    env_or, Board, BoardArgs, Color, Decider, DeciderFactory, GameError, RandomDecider,
    RandomDeciderArgs,
};

const DEFAULT_MAX_TURNS: usize = 200;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let mut board = Board::from_args(BoardArgs::from_env()?)?;
    info!("Created {} x {} board {}", board.n(), board.m(), board.game_id());

    let white_args = RandomDeciderArgs::from_env()?;
    // both sides get their own sequence from the same seed
    let black_args = RandomDeciderArgs {
        seed: white_args.seed.map(|seed| seed.wrapping_add(1)),
    };
    let mut deciders = [
        DeciderFactory::create::<RandomDecider>(Color::White, white_args)?,
        DeciderFactory::create::<RandomDecider>(Color::Black, black_args)?,
    ];

    let max_turns = env_or("MAX_TURNS", DEFAULT_MAX_TURNS)?;
    println!("{}", board);

    for turn in 0..max_turns {
        let decider = &mut deciders[turn % 2];
        match decider.make_move(&mut board) {
            Ok(applied) => println!("{}\n{}", applied, board),
            Err(GameError::NoLegalMoves { color }) => {
                info!("{} has no legal moves left after {} turns", color.name(), turn);
                break;
            }
            Err(err) => return Err(err),
        }
    }

    match serde_json::to_string(board.history()) {
        Ok(history) => info!("Game history: {}", history),
        Err(err) => warn!("Failed to serialize game history: {}", err),
    }
    Ok(())
}
