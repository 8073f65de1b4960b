use std::io;

use battleship_solo::{cli::BoardArgs, init_logging, run, Console};
use clap::Parser;

/// Find the hidden ships before the guesses run out.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.board.config();
    if let Some(s) = cli.board.seed {
        log::info!("using fixed seed {}", s);
    }
    let mut rng = cli.board.rng();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let played = run(&config, &mut rng, &mut console)?;
    log::info!("played {} game(s)", played.len());
    Ok(())
}
