// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive walkthrough: one line of input per event, one frame per event.
//!
//! The loop owns the only `StepState`. Each command is a transition on it, and
//! after every transition the current step is rendered again from scratch.
//! Engine errors (an undefined score at some `k`) show up inside the frame;
//! they never end the walk.

use super::display::{draw_header, draw_view};
use rankfuse::presenter::{parse_k_input, render};
use rankfuse::{RankingStore, Step, StepState};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  n, next          next step
  p, prev          previous step
  1, 2, 3          jump to a step (also: step N)
  k VALUE          set the smoothing constant
  r, reset         back to step 1 with k = 60
  h, help          this text
  q, quit          leave
";

/// One line of walk input.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkCommand {
    Next,
    Previous,
    /// 1-based step number as typed.
    Jump(usize),
    SetK(f64),
    Reset,
    Help,
    Quit,
    /// Blank line: redraw.
    Redraw,
    Unknown(String),
}

impl WalkCommand {
    pub fn parse(line: &str) -> WalkCommand {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_lowercase().as_str() {
            "" => WalkCommand::Redraw,
            "n" | "next" => WalkCommand::Next,
            "p" | "prev" | "previous" => WalkCommand::Previous,
            "r" | "reset" => WalkCommand::Reset,
            "h" | "help" | "?" => WalkCommand::Help,
            "q" | "quit" | "exit" => WalkCommand::Quit,
            "k" => WalkCommand::SetK(parse_k_input(rest)),
            "step" => match rest.parse() {
                Ok(n) => WalkCommand::Jump(n),
                Err(_) => WalkCommand::Unknown(line.to_string()),
            },
            _ => match head.parse() {
                Ok(n) if rest.is_empty() => WalkCommand::Jump(n),
                _ => WalkCommand::Unknown(line.to_string()),
            },
        }
    }
}

fn draw(state: &StepState, store: &RankingStore, output: &mut impl Write) -> io::Result<()> {
    write!(output, "{}", draw_header(state))?;
    write!(output, "{}", draw_view(&render(state, store)))?;
    output.flush()
}

/// Run the walk until `quit` or end of input. Returns the final state.
pub fn run_walk<R: BufRead, W: Write>(
    store: &RankingStore,
    input: R,
    mut output: W,
) -> io::Result<StepState> {
    let mut state = StepState::new();
    draw(&state, store, &mut output)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let command = WalkCommand::parse(&line?);
        tracing::debug!(?command, "walk input");

        match command {
            WalkCommand::Quit => return Ok(state),
            WalkCommand::Next => state.next(),
            WalkCommand::Previous => state.previous(),
            WalkCommand::Reset => state.reset(),
            WalkCommand::SetK(k) => state.set_k(k),
            WalkCommand::Redraw => {}
            WalkCommand::Jump(n) => {
                let jumped = n
                    .checked_sub(1)
                    .is_some_and(|index| state.jump_to_index(index).is_ok());
                if !jumped {
                    writeln!(output, "⚠ no step {} (steps are 1-{})", n, Step::ALL.len())?;
                }
            }
            WalkCommand::Help => {
                write!(output, "{}> ", HELP)?;
                output.flush()?;
                continue;
            }
            WalkCommand::Unknown(text) => {
                write!(output, "⚠ unknown command '{}' (h for help)\n> ", text)?;
                output.flush()?;
                continue;
            }
        }

        draw(&state, store, &mut output)?;
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(state)
}
