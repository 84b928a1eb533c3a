use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use interactive_qcm::{
    ApiRequest, ApiResponse, AppState, FailedRequest, QuizSession, ScoreReport, handle_quiz_input,
    logger, spawn_api_worker,
    ui::{
        draw_load_error, draw_loading, draw_quit_confirmation, draw_quiz, draw_submitting,
        draw_summary,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_api_worker(response_tx, request_rx);

    let mut app_state = AppState::Loading;
    let mut quiz_session: Option<QuizSession> = None;
    let mut score: Option<ScoreReport> = None;
    let mut last_error: Option<String> = None;

    request_tx.send(ApiRequest::FetchQuestions).ok();
    logger::log("Requested question list");

    loop {
        terminal.draw(|f| match app_state {
            AppState::Loading => draw_loading(f),
            AppState::LoadFailed => {
                draw_load_error(f, last_error.as_deref().unwrap_or("Unknown error"))
            }
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Submitting => draw_submitting(f, last_error.as_deref()),
            AppState::Summary => {
                if let Some(report) = &score {
                    let (questions, answers) = match &quiz_session {
                        Some(session) => (session.questions.as_slice(), session.answers.as_slice()),
                        None => (&[][..], &[][..]),
                    };
                    draw_summary(f, questions, answers, report);
                }
            }
        })?;

        while let Ok(response) = response_rx.try_recv() {
            match response {
                ApiResponse::Questions(questions) => {
                    logger::log(&format!("Loaded {} questions", questions.len()));
                    if questions.is_empty() {
                        // Nothing to ask: report an empty run without
                        // bothering the scoring endpoint.
                        score = Some(ScoreReport::empty());
                        app_state = AppState::Summary;
                    } else {
                        quiz_session = Some(QuizSession::new(questions));
                        app_state = AppState::Quiz;
                    }
                }
                ApiResponse::Score(report) => {
                    logger::log("Received score report");
                    score = Some(report);
                    app_state = AppState::Summary;
                }
                ApiResponse::Error {
                    request: FailedRequest::Fetch,
                    message,
                } => {
                    logger::log(&format!("Load failed: {}", message));
                    last_error = Some(message);
                    app_state = AppState::LoadFailed;
                }
                ApiResponse::Error {
                    request: FailedRequest::Submit,
                    message,
                } => {
                    // The banner shows on the submitting screen; there is
                    // no retry.
                    logger::log(&format!("Submission failed: {}", message));
                    last_error = Some(message);
                }
            }
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            match app_state {
                AppState::Loading | AppState::LoadFailed | AppState::Submitting => {
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        break;
                    }
                }
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut app_state);
                        if app_state == AppState::Submitting {
                            let answers = session.answers.clone();
                            logger::log(&format!("Submitting {} answers", answers.len()));
                            request_tx
                                .send(ApiRequest::SubmitAnswers { answers })
                                .ok();
                        }
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') => break,
                    KeyCode::Char('n') | KeyCode::Esc => app_state = AppState::Quiz,
                    _ => {}
                },
                AppState::Summary => {
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        break;
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
