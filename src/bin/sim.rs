//! Plays one unattended session and prints its summary as JSON.

use std::io;

use battleship_solo::{cli::BoardArgs, init_logging, play_session, Console, GameSession, SweepPlayer};
use clap::Parser;
use serde_json::json;

#[derive(Parser)]
#[command(about = "Sweep the board in reading order and report the result")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.board.config();
    config.validate()?;
    let mut rng = cli.board.rng();

    let mut session = GameSession::new(&config, &mut rng);
    let mut console = Console::new(io::empty(), io::sink());
    let summary = play_session(&mut session, &mut SweepPlayer::new(), &mut console)?;

    let result = json!({
        "config": config,
        "summary": summary,
        "fleet": session.fleet(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
