use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::engine::session::{FirstPlayerMode, SessionRng};
use tictactoe_engine::engine::tictactoe::{GameStatus, Mark, TicTacToeGameState, best_move};
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "selfplay")]
struct Args {
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SelfplayConfig {
    games: u32,
    opponent: Opponent,
    first_player: FirstPlayerMode,
    seed: Option<u64>,
}

impl Default for SelfplayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            opponent: Opponent::Minimax,
            first_player: FirstPlayerMode::Random,
            seed: None,
        }
    }
}

impl Validate for SelfplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("Game count must be at least 1".to_string());
        }
        if self.games > 100_000 {
            return Err("Game count must not exceed 100000".to_string());
        }
        Ok(())
    }
}

struct GameReport {
    winner: Option<Mark>,
    engine_mark: Mark,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Selfplay".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Playing {} games against {:?} opponent (seed {})",
        config.games,
        config.opponent,
        rng.seed()
    );

    let mut engine_wins = 0u32;
    let mut opponent_wins = 0u32;
    let mut draws = 0u32;

    for game_number in 1..=config.games {
        let report = play_game(&config, &mut rng)?;
        match report.winner {
            Some(mark) if mark == report.engine_mark => {
                engine_wins += 1;
                log!("Game {}: engine won as {}", game_number, mark);
            }
            Some(mark) => {
                opponent_wins += 1;
                log!("Game {}: opponent won as {}", game_number, mark);
            }
            None => {
                draws += 1;
                log!("Game {}: draw", game_number);
            }
        }
    }

    log!(
        "Finished: {} engine wins, {} opponent wins, {} draws",
        engine_wins,
        opponent_wins,
        draws
    );

    if opponent_wins > 0 {
        return Err(format!("Perfect play lost {} game(s)", opponent_wins).into());
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<SelfplayConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let manager: ConfigManager<_, SelfplayConfig, _> = ConfigManager::from_yaml_file(path);
            manager.get_config()?
        }
        None => SelfplayConfig::default(),
    };

    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(opponent) = args.opponent {
        config.opponent = opponent;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

fn play_game(config: &SelfplayConfig, rng: &mut SessionRng) -> Result<GameReport, String> {
    let engine_first = match config.first_player {
        FirstPlayerMode::EngineFirst => true,
        FirstPlayerMode::HumanFirst => false,
        FirstPlayerMode::Random => rng.random_bool(),
    };
    let engine_mark = if engine_first { Mark::X } else { Mark::O };

    let mut state = TicTacToeGameState::new();
    while state.status == GameStatus::InProgress {
        let mark = state.current_mark;
        let index = if mark == engine_mark || config.opponent == Opponent::Minimax {
            best_move(&state.board, mark).map_err(|e| e.to_string())?
        } else {
            let open = state.board.empty_cells();
            *rng.pick(&open).ok_or("No open cells on an unfinished board")?
        };
        state.place_mark(mark, index).map_err(|e| e.to_string())?;
    }

    Ok(GameReport {
        winner: state.winner(),
        engine_mark,
    })
}
