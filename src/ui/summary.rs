use crate::models::{AnswerRecord, Question, ScoreReport};
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_to_width;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(
    f: &mut Frame,
    questions: &[Question],
    answers: &[AnswerRecord],
    report: &ScoreReport,
) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Quiz Complete")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(Span::styled(
        format!(
            "Score: {} / {} ({}%)",
            report.score, report.total_questions, report.percentage
        ),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(""));

    if questions.is_empty() {
        summary_text.push_line(Line::from(Span::styled(
            "The server had no questions to ask.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        summary_text.push_line(Line::from("Your answers:"));
        summary_text.push_line(Line::from(""));

        for (i, (question, record)) in questions.iter().zip(answers).enumerate() {
            summary_text.push_line(Line::from(format!(
                "{}. {}",
                i + 1,
                truncate_to_width(&question.question, 60)
            )));
            summary_text.push_line(Line::from(format!(
                "   Your answer: {}",
                truncate_to_width(&record.answer.join(", "), 56)
            )));
            summary_text.push_line(Line::from(""));
        }
    }

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
