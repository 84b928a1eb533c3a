use crate::models::{AnswerRecord, Question, ScoreReport};
use serde::Serialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const SERVER_URL_ENV: &str = "QCM_SERVER_URL";

#[derive(Debug)]
pub struct QuizServerClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    answers: &'a [AnswerRecord],
}

impl QuizServerClient {
    /// No request timeout is configured: the session waits as long as the
    /// server does.
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Server address from `QCM_SERVER_URL`, falling back to the local
    /// development server.
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(&base_url)
    }

    /// GET the question list. The response order is the quiz order.
    pub async fn fetch_questions(
        &self,
    ) -> Result<Vec<Question>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/qcms", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Question request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read question response: {}", e))?;

        if !status.is_success() {
            return Err(format!("Question endpoint returned {}", status).into());
        }

        parse_questions(&body).map_err(Into::into)
    }

    /// POST the full answer log and decode the score summary.
    pub async fn submit_answers(
        &self,
        answers: &[AnswerRecord],
    ) -> Result<ScoreReport, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/submit", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&SubmitBody { answers })
            .send()
            .await
            .map_err(|e| format!("Submission request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read submission response: {}", e))?;

        if !status.is_success() {
            return Err(format!("Submission endpoint returned {}", status).into());
        }

        let report: ScoreReport = serde_json::from_str(&body)
            .map_err(|e| format!("Malformed score response: {}\nBody: {}", e, body))?;
        Ok(report)
    }
}

/// Decode and validate the question payload: a JSON sequence of objects,
/// each carrying at least `id`, `question` and `options`. Any shape
/// violation rejects the whole payload rather than loading a partial list.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, String> {
    serde_json::from_str(body).map_err(|e| format!("Malformed question payload: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    #[test]
    fn test_parse_questions_with_string_ids() {
        let body = r#"[
            {"id": "rec001", "question": "Capital of France?",
             "options": ["Paris", "Lyon"], "correct_option": "Paris"}
        ]"#;

        let questions = parse_questions(body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, QuestionId::Text("rec001".to_string()));
        assert_eq!(questions[0].question, "Capital of France?");
        assert_eq!(questions[0].options, vec!["Paris", "Lyon"]);
        assert_eq!(questions[0].correct_option, Some("Paris".to_string()));
    }

    #[test]
    fn test_parse_questions_with_numeric_ids() {
        let body = r#"[{"id": 42, "question": "2+2?", "options": ["3", "4"], "correct_option": "4"}]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions[0].id, QuestionId::Number(42));
    }

    #[test]
    fn test_parse_questions_without_correct_option() {
        let body = r#"[{"id": 1, "question": "Q", "options": ["a"]}]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions[0].correct_option, None);
    }

    #[test]
    fn test_parse_questions_with_null_correct_option() {
        let body = r#"[{"id": 1, "question": "Q", "options": ["a"], "correct_option": null}]"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions[0].correct_option, None);
    }

    #[test]
    fn test_parse_questions_empty_list() {
        let questions = parse_questions("[]").unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn test_parse_questions_rejects_missing_options() {
        let body = r#"[{"id": 1, "question": "Q"}]"#;
        assert!(parse_questions(body).is_err());
    }

    #[test]
    fn test_parse_questions_rejects_missing_id() {
        let body = r#"[{"question": "Q", "options": ["a"]}]"#;
        assert!(parse_questions(body).is_err());
    }

    #[test]
    fn test_parse_questions_rejects_non_sequence() {
        assert!(parse_questions(r#"{"error": "boom"}"#).is_err());
        assert!(parse_questions("not json at all").is_err());
    }

    #[test]
    fn test_parse_questions_rejects_non_string_options() {
        let body = r#"[{"id": 1, "question": "Q", "options": ["a", 2]}]"#;
        assert!(parse_questions(body).is_err());
    }

    #[test]
    fn test_parse_questions_keeps_server_order() {
        let body = r#"[
            {"id": 3, "question": "third", "options": ["x"]},
            {"id": 1, "question": "first", "options": ["x"]},
            {"id": 2, "question": "second", "options": ["x"]}
        ]"#;
        let questions = parse_questions(body).unwrap();
        let ids: Vec<&QuestionId> = questions.iter().map(|q| &q.id).collect();
        assert_eq!(
            ids,
            vec![
                &QuestionId::Number(3),
                &QuestionId::Number(1),
                &QuestionId::Number(2)
            ]
        );
    }

    #[test]
    fn test_submit_body_wire_shape() {
        let answers = vec![
            AnswerRecord {
                id: QuestionId::Number(1),
                answer: vec!["A".to_string(), "C".to_string()],
            },
            AnswerRecord {
                id: QuestionId::Text("rec002".to_string()),
                answer: vec!["X".to_string()],
            },
        ];

        let value = serde_json::to_value(SubmitBody { answers: &answers }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "answers": [
                    {"id": 1, "answer": ["A", "C"]},
                    {"id": "rec002", "answer": ["X"]},
                ]
            })
        );
    }

    #[test]
    fn test_score_report_decoding() {
        let report: ScoreReport =
            serde_json::from_str(r#"{"score": 7, "total_questions": 10, "percentage": 70.0}"#)
                .unwrap();
        assert_eq!(report.score, 7.0);
        assert_eq!(report.total_questions, 10);
        assert_eq!(report.percentage, 70.0);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = QuizServerClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
