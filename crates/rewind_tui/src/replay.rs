//! Headless playback of click events.
//!
//! Events go through the same [`Session`] handlers as the terminal UI, so
//! illegal ones are ignored the same way.

use rewind_tictactoe::{Cell, Marker, MoveEntry, Session, Status, Timeline};
use serde::Serialize;
use std::str::FromStr;
use tracing::{info, instrument};

/// One scripted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent {
    /// Click on a board cell.
    Cell(Cell),
    /// Click on the move-list entry for a step.
    Jump(usize),
}

/// Error returned for text that is neither a cell nor a jump.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid event {:?}: expected a cell (0-8 or label) or a jump (j<step>)", _0)]
pub struct ParseEventError(pub String);

impl std::error::Error for ParseEventError {}

impl FromStr for ReplayEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(step) = trimmed.strip_prefix(['j', 'J']) {
            return step
                .parse()
                .map(ReplayEvent::Jump)
                .map_err(|_| ParseEventError(s.to_string()));
        }
        trimmed
            .parse::<Cell>()
            .map(ReplayEvent::Cell)
            .map_err(|_| ParseEventError(s.to_string()))
    }
}

/// Final state of a replay, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ReplaySummary<'a> {
    /// Status line text.
    pub status: String,
    /// Winner of the viewed board, if any.
    pub winner: Option<Marker>,
    /// Move list entries.
    pub moves: Vec<MoveEntry>,
    /// Full history and viewed step.
    pub timeline: &'a Timeline,
}

/// Feeds `events` into a fresh session and returns it.
#[instrument(skip(events), fields(count = events.len()))]
pub fn replay(events: &[ReplayEvent]) -> Session {
    let mut session = Session::new();
    let mut accepted = 0;
    for event in events {
        let changed = match event {
            ReplayEvent::Cell(cell) => session.click_cell(cell.to_index()),
            ReplayEvent::Jump(step) => session.click_move(*step),
        };
        if changed {
            accepted += 1;
        }
    }
    info!(accepted, status = %session.status(), "Replay finished");
    session
}

/// Renders the session as a board, a status line and the move list.
pub fn render_text(session: &Session) -> String {
    let mut out = format!("{}\n\n{}\n\n", session.board().display(), session.status());
    for entry in session.moves() {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

/// Renders the session as pretty JSON.
pub fn render_json(session: &Session) -> Result<String, serde_json::Error> {
    let status = session.status();
    let summary = ReplaySummary {
        status: status.to_string(),
        winner: match status {
            Status::Winner(marker) => Some(marker),
            Status::NextPlayer(_) => None,
        },
        moves: session.moves(),
        timeline: session.timeline(),
    };
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(text: &[&str]) -> Vec<ReplayEvent> {
        text.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_events() {
        assert_eq!("4".parse(), Ok(ReplayEvent::Cell(Cell::Center)));
        assert_eq!("Top-left".parse(), Ok(ReplayEvent::Cell(Cell::TopLeft)));
        assert_eq!("j3".parse(), Ok(ReplayEvent::Jump(3)));
        assert!("jx".parse::<ReplayEvent>().is_err());
        assert!("10".parse::<ReplayEvent>().is_err());
    }

    #[test]
    fn test_replay_text() {
        let session = replay(&events(&["4", "0", "8"]));
        assert_eq!(
            render_text(&session),
            "O|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|X\n\nNext player: O\n\n  Go to game start\n  Go to move #1\n  Go to move #2\n> Go to move #3\n"
        );
    }

    #[test]
    fn test_ignored_events_stay_ignored() {
        let session = replay(&events(&["0", "3", "1", "4", "2", "5", "j9"]));
        assert_eq!(session.status(), Status::Winner(Marker::X));
        assert_eq!(session.timeline().history().len(), 6);
        assert_eq!(session.timeline().current_move(), 5);
    }

    #[test]
    fn test_replay_json() {
        let session = replay(&events(&["0", "3", "1", "4", "2", "j2"]));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&session).unwrap()).unwrap();

        assert_eq!(json["status"], "Next player: X");
        assert!(json["winner"].is_null());
        assert_eq!(json["timeline"]["current_move"], 2);
        assert_eq!(json["timeline"]["history"].as_array().unwrap().len(), 6);
        assert_eq!(json["moves"][2]["current"], true);
    }
}
