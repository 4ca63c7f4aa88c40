pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::QuizApp;
pub use theme::{resolve_theme, ThemeColors};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::scoring::{AnswerSequence, QuestionBank};

/// Run the interactive quiz. Returns the answers once every question is
/// answered, or None if the user quit first.
pub async fn run_quiz_tui(
    bank: QuestionBank,
    theme: ThemeColors,
) -> anyhow::Result<Option<AnswerSequence>> {
    // Buffer log output while the TUI owns the terminal
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(Duration::from_millis(100));
    let mut app = QuizApp::new(bank, theme);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.tick(),
            None => app.quit(),
        }

        if app.finished {
            break Ok(app.answer_sequence());
        }
        if app.should_quit {
            break Ok(None);
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    crate::stderr_buffer::flush_to_stderr();

    tracing::debug!(completed = matches!(outcome, Ok(Some(_))), "quiz closed");
    outcome
}

fn handle_key_event(app: &mut QuizApp, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Question => match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

            // Direct answers
            KeyCode::Char(c @ 'a'..='f') => app.select_option(c as usize - 'a' as usize),
            KeyCode::Char(c @ 'A'..='F') => app.select_option(c as usize - 'A' as usize),
            KeyCode::Char(c @ '1'..='6') => app.select_option(c as usize - '1' as usize),

            // Highlight
            KeyCode::Char('j') | KeyCode::Down => app.next_option(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),

            // Question navigation
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('p') => app.go_previous(),
            KeyCode::Right | KeyCode::Char('n') => app.go_next(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
