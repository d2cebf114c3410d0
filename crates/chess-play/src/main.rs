//! Chess Play - play chess in the terminal against the minimax engine.

use chess_play::render::render;
use chess_play::{parse_command, Command, EngineSide, Game, PlayConfig, Status};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Chess Play - terminal chess against a minimax opponent.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess in the terminal against a minimax engine")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value_os_t = PlayConfig::default_path())]
    config: PathBuf,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Side played by the engine
    #[arg(long, value_enum)]
    engine: Option<EngineSide>,

    /// Seed for the engine's random tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound of the random noise added to root scores
    #[arg(long)]
    jitter: Option<f64>,
}

impl Args {
    fn apply(&self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(jitter) = self.jitter {
            config.jitter = jitter;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Args::parse();

    let mut config = PlayConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;
    tracing::info!(
        "Depth {}, jitter {}, engine {:?}",
        config.depth,
        config.jitter,
        config.engine
    );

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config.search_params(), config.engine.color(), rng);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        if game.is_engine_turn() {
            let m = game.play_engine_move()?;
            println!("Engine plays {}", m);
            continue;
        }

        print!("\n{}", render(game.position()));
        let status = game.status();
        if status.is_over() {
            println!("Game over: {}", status);
            break;
        }
        if status != Status::Ongoing {
            println!("{}", status);
        }

        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Ok(Command::Quit) => break,
            Ok(Command::Pick { row, col }) => {
                game.select(row, col);
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}
