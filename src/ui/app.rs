use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::ai::Difficulty;
use crate::config::AppConfig;
use crate::controller::GameController;
use crate::error::MoveError;
use crate::game::{GameOutcome, Phase, Player, COLS};

use super::game_view;

enum Screen {
    SelectDifficulty { highlighted: usize },
    Playing(GameController),
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// When the pending computer move may be played.
    computer_due: Option<Instant>,
}

impl App {
    /// Start on the difficulty dialog, or straight into a game when the
    /// config already names a tier.
    pub fn new(config: AppConfig) -> Self {
        let mut app = App {
            screen: Screen::SelectDifficulty {
                highlighted: Difficulty::ALL.len() - 1,
            },
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
            computer_due: None,
            config,
        };
        if let Some(difficulty) = app.config.game.difficulty {
            app.start(difficulty);
        }
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    fn start(&mut self, difficulty: Difficulty) {
        let controller =
            GameController::new(difficulty, self.config.search, self.config.game.seed);
        self.message = Some(first_move_message(controller.phase()));
        self.screen = Screen::Playing(controller);
        self.selected_column = COLS / 2;
        self.schedule_computer();
    }

    fn schedule_computer(&mut self) {
        self.computer_due = match &self.screen {
            Screen::Playing(game) if game.is_computer_turn() => {
                Some(Instant::now() + Duration::from_millis(self.config.game.ai_delay_ms))
            }
            _ => None,
        };
    }

    /// Play the computer's move once its delay has elapsed.
    fn tick(&mut self) {
        let Some(due) = self.computer_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.computer_due = None;

        if let Screen::Playing(game) = &mut self.screen {
            match game.take_computer_turn() {
                Ok(column) => {
                    self.message = Some(match game.phase() {
                        Phase::Over(outcome) => outcome_message(outcome),
                        Phase::AwaitingMove(_) => {
                            format!("Computer dropped in column {}. Your turn.", column + 1)
                        }
                    });
                }
                Err(err) => tracing::warn!(%err, "computer turn skipped"),
            }
        }
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
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if let Screen::Playing(_) = self.screen {
            self.handle_game_key(key);
            return;
        }
        let Screen::SelectDifficulty { highlighted } = &mut self.screen else {
            return;
        };

        let choice = match key.code {
            KeyCode::Up => {
                *highlighted = highlighted.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                *highlighted = (*highlighted + 1).min(Difficulty::ALL.len() - 1);
                None
            }
            KeyCode::Char('b') => Some(Difficulty::Beginner),
            KeyCode::Char('m') => Some(Difficulty::Medium),
            KeyCode::Char('h') => Some(Difficulty::Hard),
            KeyCode::Enter => Some(Difficulty::ALL[*highlighted]),
            _ => None,
        };
        if let Some(difficulty) = choice {
            self.start(difficulty);
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                if let Screen::Playing(game) = &mut self.screen {
                    game.reset();
                    self.message = Some(first_move_message(game.phase()));
                }
                self.selected_column = COLS / 2;
                self.schedule_computer();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };

        self.message = Some(match game.human_move(self.selected_column) {
            Ok(Phase::Over(outcome)) => outcome_message(outcome),
            Ok(Phase::AwaitingMove(_)) => "Computer is thinking...".to_string(),
            Err(MoveError::ColumnFull { .. }) => {
                "This column is full! Choose another one.".to_string()
            }
            Err(MoveError::GameOver) => "Game over! Press 'r' to restart.".to_string(),
            Err(MoveError::OutOfTurn(_)) => "Wait for the computer to move.".to_string(),
            Err(err) => err.to_string(),
        });
        self.schedule_computer();
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::SelectDifficulty { highlighted } => {
                game_view::render_difficulty(frame, *highlighted)
            }
            Screen::Playing(game) => {
                game_view::render(frame, game, self.selected_column, &self.message)
            }
        }
    }
}

fn first_move_message(phase: Phase) -> String {
    match phase {
        Phase::AwaitingMove(player) if player == Player::HUMAN => {
            "Coin flip: you go first.".to_string()
        }
        _ => "Coin flip: the computer goes first.".to_string(),
    }
}

fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) if player == Player::HUMAN => {
            format!("{} wins! You beat the computer. Press 'r' to play again.", player.name())
        }
        GameOutcome::Winner(player) => {
            format!("{} wins! The computer got you. Press 'r' to play again.", player.name())
        }
        GameOutcome::Draw => "It's a draw! Press 'r' to play again.".to_string(),
        GameOutcome::InProgress => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn seeded_config(difficulty: Option<Difficulty>) -> AppConfig {
        let mut config = AppConfig::default();
        config.game.difficulty = difficulty;
        config.game.seed = Some(4);
        config.game.ai_delay_ms = 0;
        config
    }

    #[test]
    fn starts_on_difficulty_dialog_without_configured_tier() {
        let app = App::new(seeded_config(None));
        assert!(matches!(app.screen, Screen::SelectDifficulty { .. }));
    }

    #[test]
    fn choosing_difficulty_starts_game() {
        let mut app = App::new(seeded_config(None));
        press(&mut app, KeyCode::Char('m'));
        match &app.screen {
            Screen::Playing(game) => assert_eq!(game.difficulty(), Difficulty::Medium),
            Screen::SelectDifficulty { .. } => panic!("still on the dialog"),
        }
    }

    #[test]
    fn computer_moves_after_human_once_due() {
        let mut app = App::new(seeded_config(Some(Difficulty::Beginner)));
        // Let the computer open if it won the coin flip.
        app.tick();
        press(&mut app, KeyCode::Char('4'));
        assert!(app.computer_due.is_some());
        app.tick();
        let Screen::Playing(game) = &app.screen else {
            panic!("not playing");
        };
        assert_eq!(game.phase(), Phase::AwaitingMove(Player::HUMAN));
        let pieces = crate::game::ROWS * COLS - count_empty(game);
        assert!(pieces >= 2);
    }

    fn count_empty(game: &GameController) -> usize {
        let board = game.state().board();
        (0..crate::game::ROWS)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| board.get(row, col) == crate::game::Cell::Empty)
            .count()
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(seeded_config(None));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
