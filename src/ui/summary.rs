use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::{Answer, Column, Question};

const QUESTION_PREVIEW_LENGTH: usize = 40;
const UNANSWERED: &str = "-";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_overview(frame, chunks[1], app.answered_count(), app.total_questions());
    render_answers(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_overview(frame: &mut Frame, area: Rect, answered: usize, total: usize) {
    let color = if answered == total {
        Color::Green
    } else {
        Color::Yellow
    };
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SUMMARY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} answered", answered, total),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .questions()
        .iter()
        .zip(app.answers().iter())
        .map(|(question, answer)| answer_line(question, *answer))
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.summary_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn answer_line(question: &Question, answer: Answer) -> Line<'static> {
    let (symbol, color) = if answer.is_complete() {
        ("+", Color::Green)
    } else {
        ("·", Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:2}. ", question.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<width$}", truncate_question(&question.text), width = QUESTION_PREVIEW_LENGTH + 3),
            Style::default().fg(Color::Gray),
        ),
    ];
    for column in Column::ALL {
        spans.push(Span::styled(
            format!("  {}: ", question.quantity(column)),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            selected_label(question, answer, column),
            Style::default().fg(Color::White),
        ));
    }
    Line::from(spans)
}

fn selected_label(question: &Question, answer: Answer, column: Column) -> String {
    answer
        .get(column)
        .and_then(|value| question.option_by_value(value))
        .map(|option| option.label.clone())
        .unwrap_or_else(|| UNANSWERED.to_string())
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  b back to questions  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerOption;

    fn question() -> Question {
        Question {
            number: 3,
            text: "A cart rolls down a long slope and keeps accelerating all the way".to_string(),
            image_url: None,
            options: vec![
                AnswerOption {
                    label: "Increases".to_string(),
                    value: 1,
                },
                AnswerOption {
                    label: "Decreases".to_string(),
                    value: 2,
                },
            ],
            physical_quantities: ["Mass".to_string(), "Speed".to_string()],
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn lists_chosen_labels_per_quantity() {
        let text = line_text(&answer_line(&question(), Answer::new(Some(2), Some(1))));

        assert!(text.contains("Mass: Decreases"));
        assert!(text.contains("Speed: Increases"));
        assert!(text.starts_with(" + "));
    }

    #[test]
    fn marks_missing_and_unknown_selections() {
        let text = line_text(&answer_line(&question(), Answer::new(None, Some(9))));

        assert!(text.contains("Mass: -"));
        assert!(text.contains("Speed: -"));
        assert!(text.starts_with(" · "));
    }

    #[test]
    fn truncates_long_question_text() {
        let preview = truncate_question(&question().text);

        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));
    }
}
