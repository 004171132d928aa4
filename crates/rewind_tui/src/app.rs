//! Application state and logic.

use crate::input::{self, Intent};
use crossterm::event::KeyCode;
use rewind_tictactoe::view::{self, MoveListItem};
use rewind_tictactoe::{GameEngine, MoveOutcome, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// The engine holds the game; everything else here is view state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    sort_order: SortOrder,
    notice: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            sort_order,
            notice: None,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Gets the status line: the game status, plus why the last move was ignored.
    pub fn status_message(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{}  ({})", self.engine.status(), notice),
            None => self.engine.status().to_string(),
        }
    }

    /// Move list in the current sort order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        view::move_list(&self.engine, self.sort_order)
    }

    /// Applies a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(intent) = input::intent_for(key) else {
            return Control::Continue;
        };
        debug!(?intent, "Handling intent");

        self.notice = None;
        match intent {
            Intent::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Intent::PlayCursor => self.play(self.cursor),
            Intent::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Intent::StepBack => {
                if let Some(step) = self.engine.current_step().checked_sub(1) {
                    self.engine.jump_to(step);
                }
            }
            Intent::StepForward => {
                self.engine.jump_to(self.engine.current_step() + 1);
            }
            Intent::FirstStep => {
                self.engine.jump_to(0);
            }
            Intent::LatestStep => {
                self.engine.jump_to(self.engine.latest_step());
            }
            Intent::ToggleSort => self.sort_order = self.sort_order.toggle(),
            Intent::Restart => self.restart(),
            Intent::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Restarts the game, keeping the view settings.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.engine = GameEngine::new();
        self.cursor = Position::Center;
        self.notice = None;
    }

    fn play(&mut self, pos: Position) {
        if let MoveOutcome::Ignored(reason) = self.engine.play_move(pos.to_index()) {
            self.notice = Some(reason.to_string());
        }
    }
}
