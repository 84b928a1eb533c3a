use crate::api::QuizServerClient;
use crate::logger;
use crate::models::{ApiRequest, ApiResponse, FailedRequest};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Spawn the thread that talks to the quiz server. The UI loop stays free
/// while a request is outstanding; results come back as `ApiResponse`
/// messages.
pub fn spawn_api_worker(
    response_tx: Sender<ApiResponse>,
    request_rx: Receiver<ApiRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("interactive-qcm::api_worker".to_string())
        .spawn(move || {
            let client = match QuizServerClient::from_env() {
                Ok(client) => client,
                Err(e) => {
                    let _ = response_tx.send(ApiResponse::Error {
                        request: FailedRequest::Fetch,
                        message: format!("Failed to create server client: {}", e),
                    });
                    return;
                }
            };

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = response_tx.send(ApiResponse::Error {
                        request: FailedRequest::Fetch,
                        message: format!("Failed to start async runtime: {}", e),
                    });
                    return;
                }
            };

            loop {
                match request_rx.recv() {
                    Ok(ApiRequest::FetchQuestions) => {
                        logger::log("Worker fetching question list");
                        match rt.block_on(client.fetch_questions()) {
                            Ok(questions) => {
                                logger::log(&format!(
                                    "Worker received {} questions",
                                    questions.len()
                                ));
                                let _ = response_tx.send(ApiResponse::Questions(questions));
                            }
                            Err(e) => {
                                logger::log(&format!("Worker fetch error: {}", e));
                                let _ = response_tx.send(ApiResponse::Error {
                                    request: FailedRequest::Fetch,
                                    message: format!("Failed to load questions: {}", e),
                                });
                            }
                        }
                    }
                    Ok(ApiRequest::SubmitAnswers { answers }) => {
                        logger::log(&format!("Worker submitting {} answers", answers.len()));
                        match rt.block_on(client.submit_answers(&answers)) {
                            Ok(report) => {
                                logger::log("Worker received score report");
                                let _ = response_tx.send(ApiResponse::Score(report));
                            }
                            Err(e) => {
                                logger::log(&format!("Worker submit error: {}", e));
                                let _ = response_tx.send(ApiResponse::Error {
                                    request: FailedRequest::Submit,
                                    message: format!("Failed to submit answers: {}", e),
                                });
                            }
                        }
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        logger::log("Worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn API worker thread")
}
