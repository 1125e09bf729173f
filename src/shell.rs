//! Line-oriented front-end over [`Tracker`], one command per line.
//!
//! The state machine is the one the GUI drives: a landing step (`enter`),
//! then random picks and status toggles on the selected country.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rand::Rng;

use crate::core::{Session, StatusRepository, Tracker};
use crate::models::VisitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Enter,
    Pick,
    Mark(VisitStatus),
    Status,
    Progress,
    Back,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enter" | "start" => Ok(ShellCommand::Enter),
            "pick" | "random" => Ok(ShellCommand::Pick),
            "visited" | "seen" => Ok(ShellCommand::Mark(VisitStatus::Visited)),
            "not-visited" | "not visited" | "unseen" => {
                Ok(ShellCommand::Mark(VisitStatus::NotVisited))
            }
            "status" => Ok(ShellCommand::Status),
            "progress" => Ok(ShellCommand::Progress),
            "back" => Ok(ShellCommand::Back),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command: {other} (try `help`)")),
        }
    }
}

const HELP: &str = "\
Commands:
  enter         leave the start screen
  pick          select a random country
  visited       mark the selected country as visited
  not-visited   mark the selected country as not visited
  status        show the selected country
  progress      show how many countries are visited
  back          return to the start screen
  quit          leave";

/// Run commands from `input` until it ends or `quit` is read.
/// Action failures are reported on `output` and the loop keeps going.
pub fn run<S, R, I, O>(
    tracker: &mut Tracker<S>,
    session: &mut Session,
    rng: &mut R,
    input: I,
    mut output: O,
) -> io::Result<()>
where
    S: StatusRepository,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "World map visit tracker. Type `enter` to start.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Enter => {
                tracker.enter(session);
                writeln!(output, "Welcome! {}", tracker.progress())?;
            }
            _ if !session.entered => {
                writeln!(output, "You are on the start screen; type `enter` first.")?
            }
            ShellCommand::Back => {
                tracker.return_to_start(session);
                writeln!(output, "Back at the start screen.")?;
            }
            ShellCommand::Pick => match tracker.pick_random(session, rng) {
                Some(name) => {
                    writeln!(output, "Selected: {} ({})", name, tracker.status_of(name))?
                }
                None => writeln!(output, "The catalog is empty.")?,
            },
            ShellCommand::Mark(status) => match tracker.mark(session, status) {
                Ok(()) => {
                    let name = session.selected().unwrap_or_default();
                    writeln!(output, "{name}: {status}")?;
                    writeln!(output, "Progress: {}", tracker.progress())?;
                }
                Err(e) => writeln!(output, "Error: {e}")?,
            },
            ShellCommand::Status => match session.selected() {
                Some(name) => {
                    writeln!(output, "Selected: {} ({})", name, tracker.status_of(name))?
                }
                None => writeln!(output, "No country selected.")?,
            },
            ShellCommand::Progress => writeln!(output, "Progress: {}", tracker.progress())?,
        }
    }
    Ok(())
}
