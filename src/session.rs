use crate::logger;
use crate::models::{AnswerRecord, AppState, Question, QuizSession};
use crossterm::event::{KeyCode, KeyEvent};

/// Outcome of an advance attempt.
#[derive(Debug, PartialEq)]
pub enum Advance {
    /// Nothing was selected; the session is unchanged.
    Refused,
    /// Moved on to the next question.
    Next,
    /// Past the last question; the answer log is complete.
    Complete,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let option_count = questions.first().map(|q| q.options.len()).unwrap_or(0);
        Self {
            questions,
            current_index: 0,
            answers: Vec::new(),
            selected: vec![false; option_count],
            option_cursor: 0,
            showing_answer: false,
            empty_selection_alert: false,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Flip the selection mark of one option row. View feedback only; the
    /// answer log is untouched until the student advances.
    pub fn toggle_option(&mut self, index: usize) {
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Show the correct option for the current question. Idempotent, and
    /// never touches selection state or the answer log.
    pub fn reveal_answer(&mut self) {
        self.showing_answer = true;
    }

    /// Selected option texts of the current question, in option-list order.
    pub fn selected_values(&self) -> Vec<String> {
        self.current_question()
            .options
            .iter()
            .zip(&self.selected)
            .filter(|(_, picked)| **picked)
            .map(|(text, _)| text.clone())
            .collect()
    }

    /// Record the current selection and move on. Refused when nothing is
    /// selected; that is the only validation rule.
    pub fn advance(&mut self) -> Advance {
        let values = self.selected_values();
        if values.is_empty() {
            self.empty_selection_alert = true;
            return Advance::Refused;
        }

        self.answers.push(AnswerRecord {
            id: self.current_question().id.clone(),
            answer: values,
        });
        self.current_index += 1;

        if self.current_index < self.questions.len() {
            // Fresh slate for the next question: no leftover selection,
            // reveal panel and alert hidden.
            self.selected = vec![false; self.questions[self.current_index].options.len()];
            self.option_cursor = 0;
            self.showing_answer = false;
            self.empty_selection_alert = false;
            Advance::Next
        } else {
            Advance::Complete
        }
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if session.option_cursor > 0 {
                session.option_cursor -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = session.current_question().options.len().saturating_sub(1);
            if session.option_cursor < last {
                session.option_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            session.toggle_option(session.option_cursor);
        }
        KeyCode::Char('a') => {
            session.reveal_answer();
        }
        KeyCode::Enter => match session.advance() {
            Advance::Refused => {
                logger::log("Advance refused: no option selected");
            }
            Advance::Next => {}
            Advance::Complete => {
                logger::log("Last question answered, handing off to submission");
                *app_state = AppState::Submitting;
            }
        },
        _ => {}
    }
}
