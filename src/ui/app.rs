use crate::config::{AppConfig, UiConfig};
use crate::error::BoardError;
use crate::game::{Coord, GameState, MoveOutcome, Stone};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::board_widget::Highlights;

pub struct App {
    game_state: GameState,
    cursor: Coord,
    ui: UiConfig,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        Ok(App {
            game_state: GameState::new(config.board.radius, config.board.starting_player)?,
            cursor: Coord::ORIGIN,
            ui: config.ui.clone(),
            should_quit: false,
            message: None,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Coord::axial(-1, 0)),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Coord::axial(1, 0)),
            KeyCode::Up | KeyCode::Char('y') => self.move_cursor(Coord::axial(0, -1)),
            KeyCode::Char('u') => self.move_cursor(Coord::axial(1, -1)),
            KeyCode::Char('b') => self.move_cursor(Coord::axial(-1, 1)),
            KeyCode::Down | KeyCode::Char('n') => self.move_cursor(Coord::axial(0, 1)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.act();
            }
            KeyCode::Char('c') => {
                self.ui.show_capturable = !self.ui.show_capturable;
            }
            KeyCode::Char('m') => {
                self.ui.show_legal_moves = !self.ui.show_legal_moves;
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.cursor = Coord::ORIGIN;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, step: Coord) {
        let next = self.cursor + step;
        if self.game_state.board().contains(next) {
            self.cursor = next;
        }
    }

    /// Place on an empty cell, capture an occupied one.
    fn act(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        let target = self.cursor;
        let stone = self.game_state.board().stone_at(target);
        let result = match stone {
            Some(Stone::Empty) => self.game_state.place(target).map(|outcome| match outcome {
                MoveOutcome::PlacedWithCapture => {
                    format!("{player} captures! {player} moves again.")
                }
                _ => format!("{player} placed at {target}."),
            }),
            _ => self
                .game_state
                .capture(target)
                .map(|()| format!("{player} captured {target}.")),
        };

        self.message = Some(match result {
            Ok(msg) => match self.game_state.winner() {
                Some(winner) => format!("{winner} wins! Press 'r' to restart."),
                None => msg,
            },
            Err(err) => format!("Illegal: {err}"),
        });
    }

    fn highlights(&self) -> Highlights {
        Highlights {
            cursor: Some(self.cursor),
            capturable: if self.ui.show_capturable {
                self.game_state.capturable_cells().into_iter().collect()
            } else {
                Default::default()
            },
            legal: if self.ui.show_legal_moves {
                self.game_state.legal_moves().into_iter().collect()
            } else {
                Default::default()
            },
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, &self.highlights(), &self.message);
    }
}
