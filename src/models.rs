use serde::{Deserialize, Serialize};

/// Opaque question identifier. The server may key questions by numeric row
/// ids or by string record ids; both round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

/// One quiz item as served by the question endpoint. Option order is the
/// display order; duplicate option texts are allowed.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_option: Option<String>,
}

/// The student's recorded selection for one question, in option-list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: QuestionId,
    pub answer: Vec<String>,
}

/// Score summary returned by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreReport {
    pub score: f64,
    pub total_questions: u64,
    pub percentage: f64,
}

impl ScoreReport {
    /// Report for a quiz with no questions. Nothing was asked, so nothing
    /// is sent to the scoring endpoint.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            total_questions: 0,
            percentage: 0.0,
        }
    }
}

#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answers: Vec<AnswerRecord>,
    /// Selection flags for the current question, one per option.
    pub selected: Vec<bool>,
    /// Highlighted option row.
    pub option_cursor: usize,
    pub showing_answer: bool,
    pub empty_selection_alert: bool,
}

#[derive(Debug)]
pub enum ApiRequest {
    FetchQuestions,
    SubmitAnswers { answers: Vec<AnswerRecord> },
}

#[derive(Debug)]
pub enum ApiResponse {
    Questions(Vec<Question>),
    Score(ScoreReport),
    Error {
        request: FailedRequest,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailedRequest {
    Fetch,
    Submit,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Loading,
    LoadFailed,
    Quiz,
    QuizQuitConfirm,
    Submitting,
    Summary,
}
