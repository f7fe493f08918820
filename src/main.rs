extern crate tic_tac_toe;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::config::Config;
use tic_tac_toe::game::Controller;
use tic_tac_toe::ui::TerminalUi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(io::stderr)
        .init();

    let controller = Controller::new(config.player_one, config.player_two)?;
    let names: Vec<String> = controller.players().iter().map(ToString::to_string).collect();
    info!("starting a game: {}", names.join(" vs "));

    let stdin = io::stdin();
    let mut ui = TerminalUi::new(controller, stdin.lock(), io::stdout());
    let state = ui.run()?;
    info!(?state, "session finished");

    Ok(())
}
