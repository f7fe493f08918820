use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;

use tracing::debug;

use super::{Command, UiResult};
use crate::game::{Controller, GameEvent, GameState};

/// Line-based front end: reads `row col` moves and prints the board after each one.
pub struct TerminalUi<R, W> {
    controller: Controller,
    events: Receiver<GameEvent>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(mut controller: Controller, input: R, output: W) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            events,
            input,
            output,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the input is exhausted or the player quits, returns the last game state.
    pub fn run(&mut self) -> UiResult<GameState> {
        self.render()?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Reset) => {
                    self.controller.reset();
                    self.render()?;
                }
                Ok(Command::Play { row, col }) => self.play(row, col)?,
                Err(err) => {
                    debug!("rejected input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
        self.output.flush()?;
        Ok(self.controller.state().clone())
    }

    fn play(&mut self, row: usize, col: usize) -> UiResult<()> {
        match self.controller.play_round(row, col) {
            Ok(_) => {
                self.render()?;
                self.announce()
            }
            Err(err) => {
                debug!(row, col, "move rejected: {}", err);
                writeln!(self.output, "{}", err)?;
                Ok(())
            }
        }
    }

    fn render(&mut self) -> UiResult<()> {
        writeln!(self.output, "{}", self.controller.board())?;
        if !self.controller.is_finished() {
            writeln!(self.output, "{}'s turn", self.controller.active_player())?;
        }
        Ok(())
    }

    fn announce(&mut self) -> UiResult<()> {
        for event in self.events.try_iter() {
            match event {
                GameEvent::GameEnded(outcome) => {
                    writeln!(self.output, "{}", outcome)?;
                    writeln!(self.output, "type `reset` to play again or `quit` to leave")?;
                }
            }
        }
        Ok(())
    }
}
