use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{Difficulty, GameConfig, GameManager, GameState, Placement, RevealCounting};

mod command;
mod render;

use command::Command;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlacementArg {
    Scan,
    Exact,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Scan => Placement::Scan,
            PlacementArg::Exact => Placement::Exact,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CountingArg {
    EmptyOnly,
    AllSafe,
}

impl From<CountingArg> for RevealCounting {
    fn from(arg: CountingArg) -> Self {
        match arg {
            CountingArg::EmptyOnly => RevealCounting::EmptyOnly,
            CountingArg::AllSafe => RevealCounting::AllSafe,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with difficulty presets and policies
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the difficulty from the config file
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Overrides the mine placement policy
    #[arg(long, value_enum)]
    placement: Option<PlacementArg>,

    /// Overrides which reveals count towards winning
    #[arg(long, value_enum)]
    counting: Option<CountingArg>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("Could not parse config {}", path.display()))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty.into();
        }
        if let Some(placement) = self.placement {
            config.placement = placement.into();
        }
        if let Some(counting) = self.counting {
            config.counting = counting.into();
        }
        Ok(config)
    }
}

/// Drives one game from `input` until it ends, input runs out or the player quits.
fn play(game: &mut GameManager, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    write!(output, "{}", render::render(game.board()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Reveal(coords)) => game.reveal(coords).map(|outcome| outcome.has_update()),
            Ok(Command::Flag(coords)) => game.flag(coords).map(|outcome| outcome.has_update()),
            Err(err) => {
                writeln!(output, "{err:#}")?;
                continue;
            }
        };

        match result {
            Ok(true) => write!(output, "{}", render::render(game.board()))?,
            Ok(false) => writeln!(output, "Nothing to do there")?,
            Err(err) => writeln!(output, "{err}")?,
        }

        match game.state() {
            GameState::Playing => writeln!(output, "Mines left: {}", game.mines_left())?,
            GameState::Won => {
                writeln!(output, "You won!")?;
                break;
            }
            GameState::Lost => {
                writeln!(output, "Boom! You lost.")?;
                break;
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = args.game_config()?;
    let mut game = match args.seed {
        Some(seed) => GameManager::with_seed(&config, seed),
        None => GameManager::new(&config),
    }
    .context("Invalid game configuration")?;
    log::debug!("Game started: {:?}", config.params());

    println!("Commands: r X Y to reveal, f X Y to flag, q to quit");
    play(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
