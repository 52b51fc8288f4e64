//! Headless presentation driver: JSON-lines actions in, JSON-lines effects out.
//!
//! DESIGN
//! ======
//! Each input line is one user event, already decoded into the reducer's
//! action shape. The driver feeds it to the reducer and writes every returned
//! effect as one JSON object per line, standing in for the page glue that
//! would otherwise apply them. Blank lines and `#` comments are skipped so
//! scripted sessions can be annotated.

use std::io::{BufRead, Write};

use boards::BoardStore;
use order::OrderState;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// A store paired with its reducer.
pub trait Reducer {
    type Action: DeserializeOwned;
    type Effect: Serialize;

    fn apply(&mut self, action: Self::Action) -> Vec<Self::Effect>;
}

impl Reducer for BoardStore {
    type Action = boards::BoardAction;
    type Effect = boards::BoardEffect;

    fn apply(&mut self, action: Self::Action) -> Vec<Self::Effect> {
        boards::dispatch(self, action)
    }
}

impl Reducer for OrderState {
    type Action = order::OrderAction;
    type Effect = order::OrderEffect;

    fn apply(&mut self, action: Self::Action) -> Vec<Self::Effect> {
        order::dispatch(self, action)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub actions: usize,
    pub skipped: usize,
    pub effects: usize,
}

/// Drive `reducer` with every action line in `input`.
///
/// `on_effect` sees each effect after it has been written, so callers can act
/// on the ones that leave the process (opening a link).
///
/// # Errors
///
/// Stops at the first unreadable or unparsable line, or the first failed write.
pub fn run_session<R, I, W, F>(
    reducer: &mut R,
    input: I,
    mut out: W,
    mut on_effect: F,
) -> Result<SessionStats, CliError>
where
    R: Reducer,
    I: BufRead,
    W: Write,
    F: FnMut(&R::Effect) -> Result<(), CliError>,
{
    let mut stats = SessionStats::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|error| CliError::io("read", format!("input line {line_no}"), error))?;

        let Some(action) = parse_action_line::<R::Action>(&line, line_no)? else {
            stats.skipped += 1;
            continue;
        };
        stats.actions += 1;

        for effect in reducer.apply(action) {
            serde_json::to_writer(&mut out, &effect)?;
            writeln!(out).map_err(|error| CliError::io("write", "output", error))?;
            on_effect(&effect)?;
            stats.effects += 1;
        }
    }

    out.flush().map_err(|error| CliError::io("flush", "output", error))?;
    Ok(stats)
}

fn parse_action_line<A: DeserializeOwned>(line: &str, line_no: usize) -> Result<Option<A>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| CliError::InvalidAction { line: line_no, source })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
