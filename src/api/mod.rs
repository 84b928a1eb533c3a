pub mod client;

pub use client::{DEFAULT_SERVER_URL, SERVER_URL_ENV, QuizServerClient, parse_questions};
