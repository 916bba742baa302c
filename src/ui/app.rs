use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::ai::GameMode;
use crate::config::AppConfig;
use crate::error::SearchError;
use crate::game::{GameEngine, GameOutcome, MoveOutcome, CENTER_COL, COLS};

/// A computer move being searched on a worker thread.
struct PendingMove {
    receiver: Receiver<Result<Option<usize>, SearchError>>,
    ready_at: Instant,
}

pub struct App {
    engine: GameEngine,
    mode: GameMode,
    ai_delay: Duration,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    pending: Option<PendingMove>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let [first, second] = config.game.contestants();
        App {
            engine: GameEngine::new(first, second),
            mode: config.game.mode,
            ai_delay: Duration::from_millis(config.ui.ai_delay_ms),
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
            pending: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.schedule_computer_move();
            self.handle_events()?;
            self.poll_computer_move();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Dropping the receiver discards any search still running
                self.pending = None;
                self.engine.reset();
                self.selected_column = CENTER_COL;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a human piece in the selected column
    fn drop_piece(&mut self) {
        if self.engine.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if !self.engine.current_contestant().is_human() {
            self.message = Some("Computer is thinking...".to_string());
            return;
        }
        self.apply_move(self.selected_column);
    }

    fn apply_move(&mut self, column: usize) {
        self.message = match self.engine.make_move(column) {
            Ok(MoveOutcome::Continue { .. }) => None,
            Ok(MoveOutcome::Finished(outcome)) => Some(outcome_message(outcome)),
            Err(err) => Some(format!("Illegal move: {err}")),
        };
    }

    /// Start a search when the computer is on the move and none is running
    fn schedule_computer_move(&mut self) {
        if self.pending.is_some()
            || self.engine.is_terminal()
            || self.engine.current_contestant().is_human()
        {
            return;
        }

        let board = *self.engine.board();
        let player = self.engine.current_player();
        let contestant = *self.engine.current_contestant();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone if the game was restarted meanwhile
            let _ = sender.send(contestant.propose(&board, player));
        });

        self.pending = Some(PendingMove {
            receiver,
            ready_at: Instant::now() + self.ai_delay,
        });
    }

    /// Apply a finished search once the move delay has passed
    fn poll_computer_move(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        if Instant::now() < pending.ready_at {
            return;
        }

        let result = match pending.receiver.try_recv() {
            Err(TryRecvError::Empty) => return,
            Ok(result) => result,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.message = Some("Computer search stopped unexpectedly".to_string());
                return;
            }
        };
        self.pending = None;

        match result {
            Ok(Some(column)) => self.apply_move(column),
            Ok(None) => {}
            Err(err) => self.message = Some(format!("Computer could not move: {err}")),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            self.mode.name(),
            self.pending.is_some(),
        );
    }
}

fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{player} wins! Press 'r' to play again."),
        GameOutcome::Draw => "It's a draw! Press 'r' to play again.".to_string(),
    }
}
