use std::time::{Duration, Instant};

use crate::scoring::{AnswerSequence, Category, Question, QuestionBank};
use crate::tui::theme::ThemeColors;

/// Pause between picking an option and moving to the next question
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(400);

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Question,
    Help,
}

pub struct QuizApp {
    pub bank: QuestionBank,
    pub theme: ThemeColors,
    /// 0-based index of the question on screen
    pub current: usize,
    pub answers: Vec<Option<Category>>,
    /// Highlighted option on the current question
    pub cursor: usize,
    pub input_mode: InputMode,
    /// When set, the app moves on once `AUTO_ADVANCE_DELAY` has passed
    pub pending_advance: Option<Instant>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub finished: bool,
}

impl QuizApp {
    pub fn new(bank: QuestionBank, theme: ThemeColors) -> Self {
        let answers = vec![None; bank.len()];
        Self {
            bank,
            theme,
            current: 0,
            answers,
            cursor: 0,
            input_mode: InputMode::Question,
            pending_advance: None,
            flash_message: None,
            should_quit: false,
            finished: false,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Fraction of questions answered, for the progress gauge
    pub fn progress_ratio(&self) -> f64 {
        if self.answers.is_empty() {
            0.0
        } else {
            self.answered_count() as f64 / self.answers.len() as f64
        }
    }

    pub fn current_answer(&self) -> Option<Category> {
        self.answers.get(self.current).copied().flatten()
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Answer the current question with the option at `index` and schedule
    /// the move to the next question.
    pub fn select_option(&mut self, index: usize) {
        self.select_option_at(index, Instant::now());
    }

    pub fn select_option_at(&mut self, index: usize, now: Instant) {
        let Some(category) = self
            .current_question()
            .and_then(|q| q.options.get(index))
            .map(|o| o.category)
        else {
            return;
        };
        self.answers[self.current] = Some(category);
        self.cursor = index;
        self.pending_advance = Some(now);
    }

    /// Answer with the highlighted option
    pub fn confirm(&mut self) {
        self.select_option(self.cursor);
    }

    /// Go back one question, keeping its answer highlighted
    pub fn go_previous(&mut self) {
        self.pending_advance = None;
        if self.current == 0 {
            self.show_flash("Already at the first question".to_string());
            return;
        }
        self.current -= 1;
        self.cursor = self.answer_cursor();
    }

    /// Skip ahead only over questions that already have an answer
    pub fn go_next(&mut self) {
        if self.current_answer().is_none() {
            self.show_flash("Pick an answer first".to_string());
            return;
        }
        self.advance();
    }

    /// Run the auto-advance if its delay has passed
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.update_flash_at(now);
        if let Some(selected_at) = self.pending_advance {
            if now.duration_since(selected_at) >= AUTO_ADVANCE_DELAY {
                self.advance();
            }
        }
    }

    fn advance(&mut self) {
        self.pending_advance = None;
        if self.current + 1 < self.question_count() {
            self.current += 1;
            self.cursor = self.answer_cursor();
            return;
        }

        // Last question: finish, or return to the first gap
        match self.answers.iter().position(Option::is_none) {
            None => self.finished = true,
            Some(gap) => {
                self.current = gap;
                self.cursor = 0;
                self.show_flash(format!("Question {} still needs an answer", gap + 1));
            }
        }
    }

    /// Cursor position of the current question's answer, or the first option
    fn answer_cursor(&self) -> usize {
        match (self.current_question(), self.current_answer()) {
            (Some(q), Some(answer)) => q
                .options
                .iter()
                .position(|o| o.category == answer)
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Completed answers. None until every question is answered.
    pub fn answer_sequence(&self) -> Option<AnswerSequence> {
        let answers: Option<Vec<Category>> = self.answers.iter().copied().collect();
        AnswerSequence::new(answers?, self.question_count()).ok()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Question;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    fn update_flash_at(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.flash_message {
            if now.saturating_duration_since(shown_at) >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> QuizApp {
        QuizApp::new(QuestionBank::reference(), ThemeColors::dark())
    }

    fn answer_all(app: &mut QuizApp, option: usize) {
        let start = Instant::now();
        for _ in 0..app.question_count() {
            app.select_option_at(option, start);
            app.tick_at(start + AUTO_ADVANCE_DELAY);
        }
    }

    #[test]
    fn test_new_app_starts_at_first_question() {
        let app = app();
        assert_eq!(app.current, 0);
        assert_eq!(app.answered_count(), 0);
        assert_eq!(app.progress_ratio(), 0.0);
        assert!(app.answer_sequence().is_none());
    }

    #[test]
    fn test_select_waits_for_delay() {
        let mut app = app();
        let start = Instant::now();
        app.select_option_at(2, start);
        assert_eq!(app.current_answer(), Some(Category::C));

        app.tick_at(start + Duration::from_millis(100));
        assert_eq!(app.current, 0);

        app.tick_at(start + AUTO_ADVANCE_DELAY);
        assert_eq!(app.current, 1);
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn test_completing_the_quiz() {
        let mut app = app();
        answer_all(&mut app, 4);
        assert!(app.finished);
        let answers = app.answer_sequence().unwrap();
        assert_eq!(answers.to_codes(), vec!["e".to_string(); 10]);
    }

    #[test]
    fn test_previous_restores_cursor_to_answer() {
        let mut app = app();
        let start = Instant::now();
        app.select_option_at(3, start);
        app.tick_at(start + AUTO_ADVANCE_DELAY);
        assert_eq!(app.cursor, 0);

        app.go_previous();
        assert_eq!(app.current, 0);
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_previous_cancels_pending_advance() {
        let mut app = app();
        let start = Instant::now();
        app.select_option_at(0, start);
        app.tick_at(start + AUTO_ADVANCE_DELAY);
        app.select_option_at(1, start);
        app.go_previous();
        app.tick_at(start + AUTO_ADVANCE_DELAY * 2);
        assert_eq!(app.current, 0);
    }

    #[test]
    fn test_previous_at_start_flashes() {
        let mut app = app();
        app.go_previous();
        assert_eq!(app.current, 0);
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_next_requires_answer() {
        let mut app = app();
        app.go_next();
        assert_eq!(app.current, 0);

        app.select_option_at(0, Instant::now());
        app.go_next();
        assert_eq!(app.current, 1);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        app.previous_option();
        assert_eq!(app.cursor, 5);
        app.next_option();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_changing_an_answer_keeps_the_rest() {
        let mut app = app();
        answer_all(&mut app, 0);
        app.finished = false;

        app.current = 4;
        let start = Instant::now();
        app.select_option_at(5, start);
        app.tick_at(start + AUTO_ADVANCE_DELAY);

        let codes = app.answer_sequence().unwrap().to_codes();
        assert_eq!(codes[4], "f");
        assert_eq!(codes.iter().filter(|c| *c == "a").count(), 9);
    }

    #[test]
    fn test_help_mode_toggle() {
        let mut app = app();
        app.show_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.dismiss_help();
        assert_eq!(app.input_mode, InputMode::Question);
    }
}
