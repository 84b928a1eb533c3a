pub mod api;
pub mod api_worker;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use api::{DEFAULT_SERVER_URL, SERVER_URL_ENV, QuizServerClient, parse_questions};
pub use api_worker::spawn_api_worker;
pub use models::{
    AnswerRecord, ApiRequest, ApiResponse, AppState, FailedRequest, Question, QuestionId,
    QuizSession, ScoreReport,
};
pub use session::{Advance, handle_quiz_input};
pub use ui::{
    draw_load_error, draw_loading, draw_quit_confirmation, draw_quiz, draw_submitting,
    draw_summary,
};
pub use utils::truncate_to_width;
