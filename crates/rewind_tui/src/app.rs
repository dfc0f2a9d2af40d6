//! Application state and logic.

use crate::input;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use rewind_tictactoe::{Cell, Session};
use tracing::{debug, instrument};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Move the board cursor.
    Cursor(Cell),
    /// Click the cell at this index.
    PlayCell(usize),
    /// Click the move-list entry for this step.
    Jump(usize),
    /// View the newest board of the branch.
    JumpLatest,
    /// View the previous board.
    StepBack,
    /// View the next board on the branch.
    StepForward,
}

/// Screen areas that respond to mouse clicks, as of the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Board cells and where they were drawn.
    pub cells: Vec<(Cell, Rect)>,
    /// Move-list entries (by step) and where they were drawn.
    pub moves: Vec<(usize, Rect)>,
}

impl HitMap {
    /// Returns the action for a click at `(column, row)`, if anything is there.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);

        if let Some((cell, _)) = self.cells.iter().find(|(_, rect)| rect.contains(pos)) {
            return Some(Action::PlayCell(cell.to_index()));
        }

        self.moves
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(step, _)| Action::Jump(*step))
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Cell,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            cursor: Cell::Center,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores where the last frame put clickable things.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = input::action_for_key(key.code, self.cursor) {
            self.apply(action);
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = self.hits.hit(mouse.column, mouse.row) {
            if let Action::PlayCell(index) = action
                && let Some(cell) = Cell::from_index(index)
            {
                self.cursor = cell;
            }
            self.apply(action);
        }
    }

    /// Applies an action to the session or the UI state.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::Cursor(cell) => self.cursor = cell,
            Action::PlayCell(index) => {
                self.session.click_cell(index);
            }
            Action::Jump(step) => {
                self.session.click_move(step);
            }
            Action::JumpLatest => {
                let latest = self.session.timeline().latest();
                self.session.click_move(latest);
            }
            Action::StepBack => {
                self.session.step_back();
            }
            Action::StepForward => {
                self.session.step_forward();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rewind_tictactoe::{Marker, Square, Status};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keyboard_play() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));

        let board = app.session().board();
        assert_eq!(board.get(Cell::Center), Square::Occupied(Marker::X));
        assert_eq!(board.get(Cell::TopCenter), Square::Occupied(Marker::O));
        assert_eq!(app.cursor(), Cell::TopCenter);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_history_navigation() {
        let mut app = App::new();
        for c in ['5', '1', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Home);
        assert_eq!(app.session().timeline().current_move(), 0);
        press(&mut app, KeyCode::Char('.'));
        assert_eq!(app.session().timeline().current_move(), 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.session().timeline().current_move(), 3);
        press(&mut app, KeyCode::Char(','));
        assert_eq!(app.session().status(), Status::NextPlayer(Marker::X));
    }

    #[test]
    fn test_mouse_hits() {
        let mut app = App::new();
        app.set_hits(HitMap {
            cells: vec![(Cell::BottomRight, Rect::new(10, 10, 4, 3))],
            moves: vec![(0, Rect::new(30, 2, 20, 1))],
        });

        app.handle_mouse(click(11, 12));
        assert_eq!(app.cursor(), Cell::BottomRight);
        assert_eq!(app.session().timeline().current_move(), 1);

        app.handle_mouse(click(35, 2));
        assert_eq!(app.session().timeline().current_move(), 0);

        // Outside every area.
        app.handle_mouse(click(0, 0));
        assert_eq!(app.session().timeline().history().len(), 2);
    }

    #[test]
    fn test_release_and_right_click_ignored() {
        let mut app = App::new();
        app.set_hits(HitMap {
            cells: vec![(Cell::TopLeft, Rect::new(0, 0, 5, 5))],
            moves: Vec::new(),
        });

        let mut event = click(1, 1);
        event.kind = MouseEventKind::Up(MouseButton::Left);
        app.handle_mouse(event);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(event);

        assert_eq!(app.session().timeline().history().len(), 1);
    }
}
